// Star model: a plain data record plus pure construction, update, and
// draw functions. Everything tier-derived is fixed at spawn time.

use rand::Rng;
use std::f32::consts::TAU;

use super::config::{FieldConfig, DIAGONAL_ARM_RATIO, RENDER_SKIP_OPACITY};
use super::painter::StarPainter;

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Opacity ceiling; the twinkle modulates below this.
    pub base_opacity: f32,
    /// Index into the config's tier table.
    pub tier: usize,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    /// Zero speed when the variant has no compound twinkle.
    pub secondary_phase: f32,
    pub secondary_speed: f32,
    pub min_opacity: f32,
}

impl Star {
    /// Sample a new star: one uniform magnitude draw picks the tier, the
    /// tier fixes the attribute ranges, position is uniform over the surface.
    pub fn spawn(cfg: &FieldConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let magnitude: f32 = rng.gen();
        let tier = tier_for(cfg, magnitude);
        let spec = &cfg.tiers[tier];

        let size = spec.size_min + rng.gen::<f32>() * spec.size_span;
        let base_opacity = spec.opacity_min + rng.gen::<f32>() * spec.opacity_span;
        let twinkle_speed = cfg.twinkle_speed_min + rng.gen::<f32>() * cfg.twinkle_speed_span;
        let twinkle_phase = rng.gen::<f32>() * TAU;
        let (secondary_speed, secondary_phase) = if cfg.compound_twinkle {
            (
                cfg.secondary_speed_min + rng.gen::<f32>() * cfg.secondary_speed_span,
                rng.gen::<f32>() * TAU,
            )
        } else {
            (0.0, 0.0)
        };

        let mut star = Star {
            x: 0.0,
            y: 0.0,
            size,
            base_opacity,
            tier,
            twinkle_phase,
            twinkle_speed,
            secondary_phase,
            secondary_speed,
            min_opacity: spec.min_opacity,
        };
        star.reposition(width, height, rng);
        star
    }

    /// Re-draw the position only; tier-derived attributes are untouched.
    pub fn reposition(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.x = rng.gen::<f32>() * width;
        self.y = rng.gen::<f32>() * height;
    }

    /// Advance both phases one frame, wrapped to [0, 2pi) so they stay
    /// bounded over arbitrarily long runtimes.
    pub fn advance(&mut self) {
        self.twinkle_phase = (self.twinkle_phase + self.twinkle_speed) % TAU;
        self.secondary_phase = (self.secondary_phase + self.secondary_speed) % TAU;
    }

    /// Current twinkle level in (0, 1].
    pub fn twinkle(&self, cfg: &FieldConfig) -> f32 {
        let primary = 0.5 + 0.5 * self.twinkle_phase.sin();
        if cfg.compound_twinkle {
            let intensity = cfg.tiers[self.tier].twinkle_intensity;
            let secondary = 0.7 + 0.3 * self.secondary_phase.sin();
            (primary * intensity + secondary) / (1.0 + intensity)
        } else {
            0.3 + 0.7 * primary
        }
    }

    /// Current opacity, with the tier floor applied.
    pub fn opacity(&self, cfg: &FieldConfig) -> f32 {
        (self.base_opacity * self.twinkle(cfg)).max(self.min_opacity)
    }

    /// Paint this star for the current frame, or nothing at all when it is
    /// imperceptibly dim.
    pub fn draw(&self, cfg: &FieldConfig, painter: &mut impl StarPainter) {
        let twinkle = self.twinkle(cfg);
        let alpha = (self.base_opacity * twinkle).max(self.min_opacity);
        if alpha < RENDER_SKIP_OPACITY {
            return;
        }

        let spec = &cfg.tiers[self.tier];
        let radius = if cfg.pulse_radius {
            self.size * (0.8 + 0.2 * twinkle)
        } else {
            self.size
        };
        let blur = if spec.has_glow {
            spec.glow_radius * twinkle
        } else {
            0.0
        };
        painter.fill_disc(self.x, self.y, radius, alpha, blur);

        if spec.has_sparkle && twinkle > cfg.sparkle_gate {
            let len = self.size * (cfg.sparkle_len_base + cfg.sparkle_len_span * twinkle);
            let sparkle_alpha = alpha * (cfg.sparkle_alpha_base + cfg.sparkle_alpha_span * twinkle);
            let mut segments = [[0.0f32; 4]; 4];
            segments[0] = [self.x, self.y - len, self.x, self.y + len];
            segments[1] = [self.x - len, self.y, self.x + len, self.y];
            let mut count = 2;
            if cfg.diagonal_sparkle && spec.is_bright && twinkle > cfg.diagonal_gate {
                let d = len * DIAGONAL_ARM_RATIO;
                segments[2] = [self.x - d, self.y - d, self.x + d, self.y + d];
                segments[3] = [self.x + d, self.y - d, self.x - d, self.y + d];
                count = 4;
            }
            painter.stroke_lines(&segments[..count], sparkle_alpha, cfg.sparkle_line_width);
        }
    }
}

/// First band whose cumulative threshold exceeds the magnitude wins.
pub fn tier_for(cfg: &FieldConfig, magnitude: f32) -> usize {
    cfg.tiers
        .iter()
        .position(|t| magnitude < t.threshold)
        .unwrap_or(cfg.tiers.len() - 1)
}

// Tuning tables for the two starfield presets.
//
// Both presets are the same renderer with different knobs: tier bands,
// density, twinkle shape, and sparkle styling. Tier attributes are drawn
// once at spawn time and never change afterwards.

/// Color/blend selection for the layer. Only affects the fixed star color,
/// never the particle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// The two shipped configurations of the one renderer design.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Themed background: fewer, calmer stars; color follows the theme.
    Classic,
    /// Dark-only background: denser field, compound twinkle, always white.
    Enhanced,
}

impl Variant {
    pub fn parse(s: &str) -> Self {
        match s {
            "enhanced" => Variant::Enhanced,
            _ => Variant::Classic,
        }
    }

    pub fn config(self) -> &'static FieldConfig {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Enhanced => &ENHANCED,
        }
    }
}

/// One magnitude band. Bands are checked in increasing threshold order and
/// the first match wins; the lowest band is the rarest and brightest.
#[derive(Clone, Copy, Debug)]
pub struct TierSpec {
    /// Cumulative upper bound on the uniform magnitude sample.
    pub threshold: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    /// Weight of the primary twinkle wave in the compound blend.
    pub twinkle_intensity: f32,
    pub glow_radius: f32,
    pub has_glow: bool,
    pub is_bright: bool,
    pub has_sparkle: bool,
    /// Floor applied to the computed opacity (0 = no floor).
    pub min_opacity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub variant: Variant,
    pub tiers: [TierSpec; 4],
    /// Target population = floor(min(w * h / density_divisor, max_stars)).
    pub density_divisor: f32,
    pub max_stars: usize,
    pub twinkle_speed_min: f32,
    pub twinkle_speed_span: f32,
    /// Secondary wave exists only when `compound_twinkle` is set.
    pub secondary_speed_min: f32,
    pub secondary_speed_span: f32,
    pub compound_twinkle: bool,
    /// Disc radius breathes with the twinkle instead of staying fixed.
    pub pulse_radius: bool,
    /// Sparkle is attempted only when the twinkle exceeds this gate.
    pub sparkle_gate: f32,
    pub sparkle_alpha_base: f32,
    pub sparkle_alpha_span: f32,
    /// Cross arm length = size * (base + span * twinkle).
    pub sparkle_len_base: f32,
    pub sparkle_len_span: f32,
    pub sparkle_line_width: f32,
    /// Bright tiers add a diagonal X above this twinkle level.
    pub diagonal_sparkle: bool,
    pub diagonal_gate: f32,
}

/// Stars dimmer than this contribute nothing to the frame (render skip).
pub const RENDER_SKIP_OPACITY: f32 = 0.1;

/// Diagonal arms are this fraction of the straight arms.
pub const DIAGONAL_ARM_RATIO: f32 = 0.7;

pub const CLASSIC: FieldConfig = FieldConfig {
    variant: Variant::Classic,
    tiers: [
        // Rare bright stars (5%)
        TierSpec {
            threshold: 0.05,
            size_min: 1.2,
            size_span: 0.8,
            opacity_min: 0.8,
            opacity_span: 0.2,
            twinkle_intensity: 0.9,
            glow_radius: 4.0,
            has_glow: true,
            is_bright: true,
            has_sparkle: true,
            min_opacity: 0.0,
        },
        // Medium stars (10%)
        TierSpec {
            threshold: 0.15,
            size_min: 0.8,
            size_span: 0.4,
            opacity_min: 0.6,
            opacity_span: 0.2,
            twinkle_intensity: 0.7,
            glow_radius: 2.5,
            has_glow: false,
            is_bright: false,
            has_sparkle: false,
            min_opacity: 0.0,
        },
        // Regular stars (25%)
        TierSpec {
            threshold: 0.4,
            size_min: 0.5,
            size_span: 0.3,
            opacity_min: 0.4,
            opacity_span: 0.3,
            twinkle_intensity: 0.5,
            glow_radius: 1.5,
            has_glow: false,
            is_bright: false,
            has_sparkle: false,
            min_opacity: 0.0,
        },
        // Dim stars (60%)
        TierSpec {
            threshold: 1.0,
            size_min: 0.2,
            size_span: 0.3,
            opacity_min: 0.2,
            opacity_span: 0.3,
            twinkle_intensity: 0.3,
            glow_radius: 1.0,
            has_glow: false,
            is_bright: false,
            has_sparkle: false,
            min_opacity: 0.0,
        },
    ],
    density_divisor: 8000.0,
    max_stars: 150,
    twinkle_speed_min: 0.02,
    twinkle_speed_span: 0.04,
    secondary_speed_min: 0.0,
    secondary_speed_span: 0.0,
    compound_twinkle: false,
    pulse_radius: false,
    sparkle_gate: 0.8,
    sparkle_alpha_base: 0.6,
    sparkle_alpha_span: 0.0,
    sparkle_len_base: 2.0,
    sparkle_len_span: 0.0,
    sparkle_line_width: 0.5,
    diagonal_sparkle: false,
    diagonal_gate: 0.7,
};

pub const ENHANCED: FieldConfig = FieldConfig {
    variant: Variant::Enhanced,
    tiers: [
        // Bright stars (8%)
        TierSpec {
            threshold: 0.08,
            size_min: 1.5,
            size_span: 1.0,
            opacity_min: 0.9,
            opacity_span: 0.1,
            twinkle_intensity: 1.0,
            glow_radius: 6.0,
            has_glow: true,
            is_bright: true,
            has_sparkle: true,
            min_opacity: 0.4,
        },
        // Medium-bright stars (12%)
        TierSpec {
            threshold: 0.2,
            size_min: 1.0,
            size_span: 0.5,
            opacity_min: 0.7,
            opacity_span: 0.2,
            twinkle_intensity: 0.8,
            glow_radius: 3.0,
            has_glow: true,
            is_bright: false,
            has_sparkle: true,
            min_opacity: 0.3,
        },
        // Medium stars (25%)
        TierSpec {
            threshold: 0.45,
            size_min: 0.6,
            size_span: 0.4,
            opacity_min: 0.5,
            opacity_span: 0.3,
            twinkle_intensity: 0.7,
            glow_radius: 2.0,
            has_glow: true,
            is_bright: false,
            has_sparkle: false,
            min_opacity: 0.2,
        },
        // Dim stars (55%)
        TierSpec {
            threshold: 1.0,
            size_min: 0.3,
            size_span: 0.3,
            opacity_min: 0.3,
            opacity_span: 0.4,
            twinkle_intensity: 0.6,
            glow_radius: 1.0,
            has_glow: false,
            is_bright: false,
            has_sparkle: false,
            min_opacity: 0.15,
        },
    ],
    density_divisor: 7000.0,
    max_stars: 180,
    twinkle_speed_min: 0.04,
    twinkle_speed_span: 0.08,
    secondary_speed_min: 0.02,
    secondary_speed_span: 0.03,
    compound_twinkle: true,
    pulse_radius: true,
    sparkle_gate: 0.0,
    sparkle_alpha_base: 0.3,
    sparkle_alpha_span: 0.5,
    sparkle_len_base: 1.5,
    sparkle_len_span: 1.0,
    sparkle_line_width: 0.8,
    diagonal_sparkle: true,
    diagonal_gate: 0.7,
};

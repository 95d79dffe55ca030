// Population controller: keeps the star count tracking the surface area
// and steps every star once per frame.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::FieldConfig;
use super::painter::StarPainter;
use super::star::Star;

pub struct Starfield {
    cfg: &'static FieldConfig,
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(cfg: &'static FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = target_count(cfg, width, height);
        let stars = (0..target)
            .map(|_| Star::spawn(cfg, width, height, &mut rng))
            .collect();
        Self {
            cfg,
            stars,
            width,
            height,
            rng,
        }
    }

    /// Track a surface size change: stars that fell outside the new bounds
    /// are repositioned (not respawned, so their tier identity survives),
    /// then the population grows or truncates to the new target.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        for star in &mut self.stars {
            if star.x >= width || star.y >= height {
                star.reposition(width, height, &mut self.rng);
            }
        }

        let target = target_count(self.cfg, width, height);
        while self.stars.len() < target {
            self.stars
                .push(Star::spawn(self.cfg, width, height, &mut self.rng));
        }
        // Eviction from the end is arbitrary but deterministic; stars are
        // visually interchangeable within a tier.
        self.stars.truncate(target);
    }

    /// One animation step: clear, then advance and draw each star in
    /// insertion order.
    pub fn frame(&mut self, painter: &mut impl StarPainter) {
        painter.clear(self.width, self.height);
        for star in &mut self.stars {
            star.advance();
            star.draw(self.cfg, painter);
        }
    }

    pub fn config(&self) -> &'static FieldConfig {
        self.cfg
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Target population for a surface area, clamped to the preset's cap.
pub fn target_count(cfg: &FieldConfig, width: f32, height: f32) -> usize {
    (width * height / cfg.density_divisor)
        .min(cfg.max_stars as f32)
        .floor() as usize
}

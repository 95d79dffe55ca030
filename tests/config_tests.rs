// Host-side tests for the preset tables and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}

use config::{FieldConfig, Theme, Variant, CLASSIC, ENHANCED, RENDER_SKIP_OPACITY};

fn check_tier_table(cfg: &FieldConfig) {
    let mut prev = 0.0;
    for spec in &cfg.tiers {
        assert!(spec.threshold > prev, "thresholds must strictly increase");
        assert!(spec.size_span >= 0.0 && spec.opacity_span >= 0.0);
        assert!(spec.min_opacity < spec.opacity_min, "floor must sit below the ceiling");
        prev = spec.threshold;
    }
    assert_eq!(cfg.tiers[3].threshold, 1.0, "bands must cover [0, 1)");
}

#[test]
fn tier_tables_are_well_formed() {
    check_tier_table(&CLASSIC);
    check_tier_table(&ENHANCED);
}

#[test]
fn rarest_band_is_the_brightest() {
    for cfg in [&CLASSIC, &ENHANCED] {
        for pair in cfg.tiers.windows(2) {
            assert!(pair[0].size_min > pair[1].size_min);
            assert!(pair[0].opacity_min > pair[1].opacity_min);
            assert!(pair[0].glow_radius > pair[1].glow_radius);
            assert!(pair[0].twinkle_intensity >= pair[1].twinkle_intensity);
        }
        assert!(cfg.tiers[0].is_bright && cfg.tiers[0].has_sparkle);
        assert!(!cfg.tiers[3].has_sparkle);
    }
}

#[test]
fn density_and_caps_are_positive() {
    for cfg in [&CLASSIC, &ENHANCED] {
        assert!(cfg.density_divisor > 0.0);
        assert!(cfg.max_stars > 0);
        assert!(cfg.twinkle_speed_min > 0.0 && cfg.twinkle_speed_span > 0.0);
    }
    assert!(RENDER_SKIP_OPACITY > 0.0 && RENDER_SKIP_OPACITY < 1.0);
}

#[test]
fn secondary_wave_exists_only_with_compound_twinkle() {
    assert!(!CLASSIC.compound_twinkle);
    assert_eq!(CLASSIC.secondary_speed_min, 0.0);
    assert_eq!(CLASSIC.secondary_speed_span, 0.0);
    assert!(ENHANCED.compound_twinkle);
    assert!(ENHANCED.secondary_speed_min > 0.0);
}

#[test]
fn sparkle_styling_stays_in_range() {
    for cfg in [&CLASSIC, &ENHANCED] {
        assert!(cfg.sparkle_alpha_base + cfg.sparkle_alpha_span <= 1.0);
        assert!(cfg.sparkle_line_width > 0.0);
        assert!(cfg.sparkle_len_base > 0.0);
        assert!(cfg.sparkle_gate >= 0.0 && cfg.sparkle_gate < 1.0);
    }
    // Only the enhanced preset draws diagonal arms.
    assert!(!CLASSIC.diagonal_sparkle);
    assert!(ENHANCED.diagonal_sparkle);
}

#[test]
fn variant_and_theme_parsing_defaults_sensibly() {
    assert_eq!(Variant::parse("enhanced"), Variant::Enhanced);
    assert_eq!(Variant::parse("classic"), Variant::Classic);
    assert_eq!(Variant::parse("anything-else"), Variant::Classic);
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse(""), Theme::Dark);
    assert_eq!(Variant::Enhanced.config().variant, Variant::Enhanced);
}

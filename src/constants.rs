use crate::core::{Theme, Variant};

// Layer styling shared by the web frontend.

pub const CANVAS_ID: &str = "starfield-canvas";
pub const CANVAS_Z_INDEX: &str = "0";

pub const STAR_WHITE: &str = "#ffffff";
pub const STAR_INK: &str = "#1e293b"; // dark slate for the light theme

/// Star color for a variant/theme pair. The enhanced variant is dark-only
/// and stays white regardless of theme.
pub fn star_color(variant: Variant, theme: Theme) -> &'static str {
    match (variant, theme) {
        (Variant::Classic, Theme::Light) => STAR_INK,
        _ => STAR_WHITE,
    }
}

/// Overall layer opacity, the one compositing knob callers get.
pub fn layer_opacity(variant: Variant) -> f32 {
    match variant {
        Variant::Classic => 0.8,
        Variant::Enhanced => 0.9,
    }
}

/// Blend mode for the layer, where the variant uses one.
pub fn layer_blend_mode(variant: Variant, theme: Theme) -> Option<&'static str> {
    match (variant, theme) {
        (Variant::Classic, Theme::Dark) => Some("screen"),
        (Variant::Classic, Theme::Light) => Some("multiply"),
        (Variant::Enhanced, _) => None,
    }
}

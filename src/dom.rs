use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{layer_blend_mode, layer_opacity, CANVAS_ID, CANVAS_Z_INDEX};
use crate::core::{Theme, Variant};

/// Viewport size in CSS pixels; the layer is sized to the viewport, not to
/// the backing-store DPR.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Find or create the background canvas. Returns the element and whether we
/// created it (created canvases are removed again on teardown).
pub fn background_canvas(
    document: &web::Document,
    variant: Variant,
    theme: Theme,
) -> anyhow::Result<(web::HtmlCanvasElement, bool)> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        let canvas: web::HtmlCanvasElement = el
            .dyn_into()
            .map_err(|_| anyhow!("#{CANVAS_ID} exists but is not a canvas"))?;
        apply_layer_style(&canvas, variant, theme);
        return Ok((canvas, false));
    }

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a canvas"))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("aria-hidden", "true");
    apply_layer_style(&canvas, variant, theme);
    document
        .body()
        .ok_or_else(|| anyhow!("no document body"))?
        .append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {e:?}"))?;
    Ok((canvas, true))
}

/// Fixed, full-viewport, pointer-transparent layer with the variant's
/// opacity and blend mode.
pub fn apply_layer_style(canvas: &web::HtmlCanvasElement, variant: Variant, theme: Theme) {
    let style = canvas.style();
    for (key, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("z-index", CANVAS_Z_INDEX),
    ] {
        _ = style.set_property(key, value);
    }
    _ = style.set_property("opacity", &layer_opacity(variant).to_string());
    match layer_blend_mode(variant, theme) {
        Some(mode) => _ = style.set_property("mix-blend-mode", mode),
        None => _ = style.remove_property("mix-blend-mode"),
    }
}

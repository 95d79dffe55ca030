/// Drawing capability the starfield renders through.
///
/// The web frontend backs this with a Canvas2D context; host tests use a
/// recording fake to count draw calls. Implementations must not let
/// per-call state (alpha, blur, stroke style) leak into the next call.
pub trait StarPainter {
    /// Erase the whole surface.
    fn clear(&mut self, width: f32, height: f32);

    /// Paint a filled disc, optionally with a soft glow halo.
    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, alpha: f32, glow_blur: f32);

    /// Stroke sparkle arms as `[x0, y0, x1, y1]` segments in one path.
    fn stroke_lines(&mut self, segments: &[[f32; 4]], alpha: f32, line_width: f32);
}

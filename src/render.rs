use web_sys as web;

use crate::core::StarPainter;

/// Canvas2D backend for the star painter. Every call is bracketed in
/// save/restore so alpha, shadow, and stroke state never leak between
/// stars or frames.
pub struct CanvasPainter<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    color: &'static str,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d, color: &'static str) -> Self {
        Self { ctx, color }
    }
}

impl StarPainter for CanvasPainter<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, alpha: f32, glow_blur: f32) {
        let ctx = self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        if glow_blur > 0.0 {
            ctx.set_shadow_color(self.color);
            ctx.set_shadow_blur(glow_blur as f64);
        }
        ctx.set_fill_style_str(self.color);
        ctx.begin_path();
        _ = ctx.arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.restore();
    }

    fn stroke_lines(&mut self, segments: &[[f32; 4]], alpha: f32, line_width: f32) {
        let ctx = self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        ctx.set_stroke_style_str(self.color);
        ctx.set_line_width(line_width as f64);
        ctx.begin_path();
        for seg in segments {
            ctx.move_to(seg[0] as f64, seg[1] as f64);
            ctx.line_to(seg[2] as f64, seg[3] as f64);
        }
        ctx.stroke();
        ctx.restore();
    }
}

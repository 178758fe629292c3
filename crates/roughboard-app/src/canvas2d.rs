//! HTML canvas 2D surface.

use kurbo::{BezPath, PathEl};
use roughboard_core::render::Surface;
use roughboard_render::Sketch;
use web_sys::CanvasRenderingContext2d;

/// Surface painting sketches onto a `CanvasRenderingContext2d`.
pub struct Canvas2dSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dSurface {
    pub fn new(context: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self {
            context,
            width,
            height,
        }
    }

    /// Track the new canvas size so `clear` covers all of it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn trace(&self, path: &BezPath) {
        self.context.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.context.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.context.line_to(p.x, p.y),
                PathEl::QuadTo(p1, p2) => self.context.quadratic_curve_to(p1.x, p1.y, p2.x, p2.y),
                PathEl::CurveTo(p1, p2, p3) => {
                    self.context.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y)
                }
                PathEl::ClosePath => self.context.close_path(),
            }
        }
        self.context.stroke();
    }
}

impl Surface for Canvas2dSurface {
    type Drawable = Sketch;

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw(&mut self, sketch: &Sketch) {
        self.context.set_line_width(sketch.stroke_width);
        self.context.set_stroke_style_str(&sketch.stroke_color.to_css());
        for path in &sketch.strokes {
            self.trace(path);
        }
    }
}

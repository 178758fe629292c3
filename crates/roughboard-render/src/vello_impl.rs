//! Vello-based surface implementation.

use crate::rough::Sketch;
use kurbo::{Affine, Stroke};
use peniko::Color;
use roughboard_core::render::Surface;
use vello::Scene;

/// Surface that records sketches into a Vello scene.
///
/// The host presents the scene with a `vello::Renderer` after each redraw.
pub struct VelloSurface {
    scene: Scene,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Surface for VelloSurface {
    type Drawable = Sketch;

    fn clear(&mut self) {
        self.scene.reset();
    }

    fn draw(&mut self, sketch: &Sketch) {
        let stroke = Stroke::new(sketch.stroke_width);
        let color: Color = sketch.stroke_color.into();
        for path in &sketch.strokes {
            self.scene.stroke(&stroke, Affine::IDENTITY, color, None, path);
        }
    }
}

//! Render loop: redraw every element whenever the store changes.

use crate::element::Element;

/// Drawing surface backed by the rendering collaborator.
pub trait Surface {
    /// Drawable type produced by the matching [`crate::element::Generator`].
    type Drawable;

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Draw one cached renderable.
    fn draw(&mut self, drawable: &Self::Drawable);
}

/// Receives store-changed notifications.
pub trait StoreObserver<D> {
    fn store_changed(&mut self, elements: &[Element<D>]);
}

/// Clears and redraws the surface on every store change, in store order so
/// later elements land on top.
#[derive(Debug)]
pub struct RenderLoop<S> {
    surface: S,
}

impl<S: Surface> RenderLoop<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Redraw all elements.
    pub fn render(&mut self, elements: &[Element<S::Drawable>]) {
        self.surface.clear();
        for element in elements {
            self.surface.draw(&element.renderable);
        }
    }
}

impl<S: Surface> StoreObserver<S::Drawable> for RenderLoop<S> {
    fn store_changed(&mut self, elements: &[Element<S::Drawable>]) {
        self.render(elements);
    }
}

//! Full-surface gradient backdrop

use super::{Element, ElementKind, FrameClock};
use crate::surface::{Paint, Rgba, Surface};

/// Paints a vertical linear gradient spanning the whole surface.
/// Stateless; `update` is a no-op.
pub struct BackgroundElement {
    width: f32,
    height: f32,
    stops: Vec<(f32, Rgba)>,
}

impl BackgroundElement {
    /// Two-color top-to-bottom gradient
    pub fn new(width: f32, height: f32, top: Rgba, bottom: Rgba) -> Self {
        Self::with_stops(width, height, vec![(0.0, top), (1.0, bottom)])
    }

    /// Arbitrary stop list (storm and haze skies use three stops)
    pub fn with_stops(width: f32, height: f32, stops: Vec<(f32, Rgba)>) -> Self {
        Self { width, height, stops }
    }
}

impl Element for BackgroundElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Background
    }

    fn update(&mut self, _clock: &FrameClock) {}

    fn render(&mut self, surface: &mut dyn Surface) {
        let paint = Paint::linear(0.0, 0.0, 0.0, self.height, self.stops.iter().copied());
        surface.fill_rect(0.0, 0.0, self.width, self.height, &paint);
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixmapSurface;

    #[test]
    fn paints_top_and_bottom_colors() {
        let mut surface = PixmapSurface::new(10, 10);
        let mut bg = BackgroundElement::new(10.0, 10.0, Rgba::rgb(0, 0, 0), Rgba::rgb(200, 200, 200));
        bg.render(&mut surface);
        assert!(surface.image().get_pixel(5, 0).0[0] < 20);
        assert!(surface.image().get_pixel(5, 9).0[0] > 150);
    }
}

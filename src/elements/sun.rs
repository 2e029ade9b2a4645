//! Sun disc with a radial glow halo

use super::{Element, ElementKind, FrameClock};
use crate::surface::{Paint, Rgba, Surface};

const SUN_RADIUS: f32 = 40.0;

/// Stateless sun at 75% width, 25% height
pub struct SunElement {
    width: f32,
    height: f32,
}

impl SunElement {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Element for SunElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Sun
    }

    fn update(&mut self, _clock: &FrameClock) {}

    fn render(&mut self, surface: &mut dyn Surface) {
        let x = self.width * 0.75;
        let y = self.height * 0.25;
        let r = SUN_RADIUS;

        // glow halo over a 4r square
        let glow = Paint::radial(
            x,
            y,
            r * 0.5,
            r * 2.0,
            [
                (0.0, Rgba::new(255, 223, 0, 0.3)),
                (1.0, Rgba::new(255, 223, 0, 0.0)),
            ],
        );
        surface.fill_rect(x - r * 2.0, y - r * 2.0, r * 4.0, r * 4.0, &glow);

        surface.fill_circle(x, y, r, &Paint::solid(Rgba::rgb(255, 215, 0)));
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

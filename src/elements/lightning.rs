//! Lightning flashes with jagged bolt strokes

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::surface::{Paint, Rgba, Stroke, Surface};
use crate::types::LightningConfig;
use rand::Rng;

const FLASH_CHANCE: f64 = 0.01;
const FLASH_DECAY: f32 = 0.05;
const BOLT_THRESHOLD: f32 = 0.7;
const BOLT_SEGMENTS: u32 = 5;

/// A probabilistic strobe: each tick has a small chance of triggering a
/// flash that then decays linearly. While the flash is fresh a jagged bolt
/// is drawn; the dimming afterglow only tints the whole scene.
pub struct LightningElement {
    width: f32,
    height: f32,
    config: LightningConfig,
    flash: f32,
}

impl LightningElement {
    pub fn new(width: f32, height: f32, config: LightningConfig) -> Self {
        Self {
            width,
            height,
            config,
            flash: 0.0,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_flash(&mut self) {
        self.flash = 1.0;
    }

    fn draw_bolt(&self, surface: &mut dyn Surface) {
        let mut rng = rand::thread_rng();
        let mut x = random_between(self.width * 0.3, self.width * 0.7);
        let mut y = 0.0;
        let step = self.height / BOLT_SEGMENTS as f32;
        let stroke = Stroke::solid(self.config.color.with_alpha(self.flash), 3.0);

        for _ in 0..BOLT_SEGMENTS {
            let next_x = x + rng.gen_range(-20.0..20.0);
            let next_y = y + step;
            surface.stroke_line(x, y, next_x, next_y, &stroke);
            x = next_x;
            y = next_y;
        }
    }
}

impl Element for LightningElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Lightning
    }

    fn update(&mut self, _clock: &FrameClock) {
        let mut rng = rand::thread_rng();
        if rng.gen_bool(FLASH_CHANCE) {
            self.flash = 1.0;
        } else if self.flash > 0.0 {
            self.flash = (self.flash - FLASH_DECAY).max(0.0);
        }
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        if self.flash <= 0.0 {
            return;
        }

        let overlay = Paint::solid(Rgba::new(255, 255, 255, self.flash * 0.3));
        surface.fill_rect(0.0, 0.0, self.width, self.height, &overlay);

        if self.flash > BOLT_THRESHOLD {
            self.draw_bolt(surface);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.flash = 0.0;
    }
}

//! Twinkling star field for night skies

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::surface::{Paint, Rgba, Surface};
use crate::types::StarsConfig;
use rand::Rng;

struct Star {
    x: f32,
    y: f32,
    radius: f32,
    twinkle_speed: f32,
    phase: f32,
}

/// N stars scattered over the upper 60% of the surface, each twinkling on
/// its own sine phase. Positions are lazily generated on first
/// update/render and regenerated after a resize.
pub struct StarsElement {
    width: f32,
    height: f32,
    count: u32,
    stars: Option<Vec<Star>>,
}

impl StarsElement {
    pub fn new(width: f32, height: f32, config: StarsConfig) -> Self {
        Self {
            width,
            height,
            count: config.count,
            stars: None,
        }
    }

    fn stars_mut(&mut self) -> &mut Vec<Star> {
        let (w, h, count) = (self.width, self.height, self.count);
        self.stars.get_or_insert_with(|| {
            let mut rng = rand::thread_rng();
            (0..count)
                .map(|_| Star {
                    x: rng.gen::<f32>() * w,
                    y: rng.gen::<f32>() * h * 0.6,
                    radius: random_between(0.5, 1.5),
                    twinkle_speed: random_between(0.02, 0.05),
                    phase: rng.gen::<f32>() * std::f32::consts::TAU,
                })
                .collect()
        })
    }

    #[cfg(test)]
    fn positions(&self) -> Option<Vec<(f32, f32)>> {
        self.stars
            .as_ref()
            .map(|stars| stars.iter().map(|s| (s.x, s.y)).collect())
    }
}

impl Element for StarsElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Stars
    }

    fn update(&mut self, _clock: &FrameClock) {
        for star in self.stars_mut() {
            star.phase += star.twinkle_speed;
        }
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        for star in self.stars_mut() {
            let opacity = 0.5 + star.phase.sin() * 0.5;
            let paint = Paint::solid(Rgba::new(255, 255, 255, opacity));
            surface.fill_circle(star.x, star.y, star.radius, &paint);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.stars = None;
    }
}

//! Snowfall built on the recycling particle pool

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::particles::ParticlePool;
use crate::surface::{Rgba, Stroke, Surface};
use crate::types::SnowConfig;
use rand::Rng;

const SPOKES: u32 = 6;

/// Emits `count` flakes per tick; the steady-state population is regulated
/// by the pool's death rate (life = height/2 ticks), not a maintained
/// target. Each flake draws as a 6-spoke glyph.
pub struct SnowElement {
    width: f32,
    height: f32,
    config: SnowConfig,
    pool: ParticlePool,
    wind: f32,
}

impl SnowElement {
    pub fn new(width: f32, height: f32, config: SnowConfig) -> Self {
        let pool = ParticlePool::new(config.count as usize);
        Self {
            width,
            height,
            config,
            pool,
            wind: 0.0,
        }
    }

    pub fn flake_count(&self) -> usize {
        self.pool.active().len()
    }

    fn draw_snowflake(surface: &mut dyn Surface, x: f32, y: f32, size: f32, alpha: f32) {
        let stroke = Stroke::solid(Rgba::new(255, 255, 255, 0.9 * alpha), 1.0);
        for i in 0..SPOKES {
            let angle = std::f32::consts::TAU * (i as f32 + 1.0) / SPOKES as f32;
            let (sin, cos) = angle.sin_cos();
            // spoke: (0,0) -> (0,-size) rotated by angle
            let tip = (x + size * sin, y - size * cos);
            surface.stroke_line(x, y, tip.0, tip.1, &stroke);
            // crossbar: (-0.3s,-0.7s) -> (0.3s,-0.7s) rotated by angle
            let (bx, by) = (0.3 * size, -0.7 * size);
            let left = (x + (-bx) * cos - by * sin, y + (-bx) * sin + by * cos);
            let right = (x + bx * cos - by * sin, y + bx * sin + by * cos);
            surface.stroke_line(left.0, left.1, right.0, right.1, &stroke);
        }
    }
}

impl Element for SnowElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Snow
    }

    fn update(&mut self, _clock: &FrameClock) {
        let mut rng = rand::thread_rng();
        for _ in 0..self.config.count {
            let x = rng.gen::<f32>() * self.width;
            // start somewhere above the top edge
            let y = rng.gen::<f32>() * self.height - self.height;
            let vx = self.wind + random_between(-1.0, 1.0);
            let vy = self.config.speed * random_between(1.0, 3.0);
            let flake = self.pool.get(x, y, vx, vy, self.height / 2.0, 0.0);
            flake.size = random_between(2.0, 6.0) * (self.config.opacity / 0.8);
        }

        self.pool.update();
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        for p in self.pool.active() {
            Self::draw_snowflake(surface, p.x, p.y, p.size, p.opacity);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.pool.clear();
    }

    /// Wind changes retroactively perturb flakes already in the air
    fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
        for p in self.pool.active_mut() {
            p.vx = wind + random_between(-1.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixmapSurface;

    fn test_element() -> SnowElement {
        SnowElement::new(
            400.0,
            200.0,
            SnowConfig {
                count: 4,
                speed: 1.0,
                opacity: 0.8,
            },
        )
    }

    #[test]
    fn emits_per_tick_and_reaches_steady_state() {
        let mut snow = test_element();
        snow.update(&FrameClock::new(1, 0.0));
        assert_eq!(snow.flake_count(), 4);
        snow.update(&FrameClock::new(2, 0.0));
        assert_eq!(snow.flake_count(), 8);

        // population is bounded by emission * lifetime
        for tick in 3..400 {
            snow.update(&FrameClock::new(tick, 0.0));
        }
        assert!(snow.flake_count() <= 4 * 100);
        assert!(snow.flake_count() > 100);
    }

    #[test]
    fn wind_perturbs_active_flakes() {
        let mut snow = test_element();
        for tick in 1..10 {
            snow.update(&FrameClock::new(tick, 0.0));
        }
        snow.set_wind(8.0);
        assert!(snow.pool.active().iter().all(|p| p.vx >= 7.0 && p.vx <= 9.0));
    }

    #[test]
    fn resize_clears_the_pool() {
        let mut snow = test_element();
        snow.update(&FrameClock::new(1, 0.0));
        assert!(snow.flake_count() > 0);
        snow.resize(100.0, 100.0);
        assert_eq!(snow.flake_count(), 0);
    }

    #[test]
    fn flakes_render_as_strokes() {
        let mut surface = PixmapSurface::new(400, 200);
        let mut snow = test_element();
        for tick in 1..50 {
            snow.update(&FrameClock::new(tick, 0.0));
        }
        snow.render(&mut surface);
        assert!(surface.image().pixels().any(|p| p.0[3] > 0));
    }
}

//! Shooting stars with fading gradient trails
//!
//! Spawn cadence is a wall-clock phenomenon (rare and human-perceptible),
//! so it reads `FrameClock::now_ms`; motion advances per tick like every
//! other element.

use super::{Element, ElementKind, FrameClock};
use crate::math::{ease_in_out_quad, random_between};
use crate::surface::{Paint, Rgba, Stroke, Surface};
use crate::types::ShootingStarsConfig;

const TRAIL_CAP: usize = 10;
const FADE_TICKS: f32 = 20.0;
const BOUNDS_MARGIN: f32 = 100.0;

struct ShootingStar {
    x: f32,
    y: f32,
    angle: f32,
    speed: f32,
    opacity: f32,
    life: f32,
    max_life: f32,
    trail: Vec<(f32, f32)>,
}

pub struct ShootingStarsElement {
    width: f32,
    height: f32,
    config: ShootingStarsConfig,
    stars: Vec<ShootingStar>,
    last_spawn_ms: f64,
    spawn_interval: f64,
}

impl ShootingStarsElement {
    pub fn new(width: f32, height: f32, config: ShootingStarsConfig) -> Self {
        let spawn_interval =
            random_between(config.spawn_interval[0] as f32, config.spawn_interval[1] as f32) as f64;
        Self {
            width,
            height,
            config,
            stars: Vec::new(),
            last_spawn_ms: 0.0,
            spawn_interval,
        }
    }

    fn spawn(&mut self) {
        // origin biased toward the upper area, possibly off-screen
        let start_x = random_between(-self.width * 0.2, self.width * 1.2);
        let start_y = random_between(-self.height * 0.2, self.height * 0.5);

        // aim at the central/lower area so the star crosses the scene
        let target_x = random_between(self.width * 0.2, self.width * 0.8);
        let target_y = random_between(self.height * 0.3, self.height * 0.8);
        let angle = (target_y - start_y).atan2(target_x - start_x);

        let life = random_between(self.config.life[0], self.config.life[1]);
        self.stars.push(ShootingStar {
            x: start_x,
            y: start_y,
            angle,
            speed: random_between(15.0, 25.0),
            opacity: 0.0,
            life,
            max_life: life,
            trail: Vec::with_capacity(TRAIL_CAP),
        });
    }

    #[cfg(test)]
    fn active_count(&self) -> usize {
        self.stars.len()
    }
}

impl Element for ShootingStarsElement {
    fn kind(&self) -> ElementKind {
        ElementKind::ShootingStars
    }

    fn update(&mut self, clock: &FrameClock) {
        if clock.now_ms - self.last_spawn_ms > self.spawn_interval {
            self.spawn();
            self.last_spawn_ms = clock.now_ms;
            self.spawn_interval = random_between(
                self.config.spawn_interval[0] as f32,
                self.config.spawn_interval[1] as f32,
            ) as f64;
        }

        let (w, h) = (self.width, self.height);
        self.stars.retain_mut(|star| {
            star.trail.insert(0, (star.x, star.y));
            star.trail.truncate(TRAIL_CAP);

            star.x += star.angle.cos() * star.speed;
            star.y += star.angle.sin() * star.speed;

            // ramp in over the first FADE_TICKS of life, out over the last
            star.life -= 1.0;
            if star.life < FADE_TICKS {
                star.opacity = ease_in_out_quad((star.life / FADE_TICKS).max(0.0));
            } else if star.opacity < 1.0 {
                star.opacity = ease_in_out_quad(((star.max_life - star.life) / FADE_TICKS).min(1.0));
            }

            star.life > 0.0
                && star.x > -BOUNDS_MARGIN
                && star.x < w + BOUNDS_MARGIN
                && star.y > -BOUNDS_MARGIN
                && star.y < h + BOUNDS_MARGIN
        });
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        for star in &self.stars {
            let Some(&(tail_x, tail_y)) = star.trail.last() else {
                continue;
            };
            let white = Rgba::rgb(255, 255, 255);
            let paint = Paint::linear(
                tail_x,
                tail_y,
                star.x,
                star.y,
                [(0.0, white.with_alpha(0.0)), (1.0, white.with_alpha(star.opacity))],
            );
            surface.stroke_line(tail_x, tail_y, star.x, star.y, &Stroke::new(paint, 2.0));
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.stars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixmapSurface;

    #[test]
    fn spawns_on_wall_clock_not_ticks() {
        let mut element = ShootingStarsElement::new(
            400.0,
            300.0,
            ShootingStarsConfig {
                spawn_interval: [1000.0, 1000.0],
                life: [60.0, 100.0],
            },
        );

        // many ticks inside the interval: no spawn beyond the initial one
        element.update(&FrameClock::new(1, 1500.0));
        assert_eq!(element.active_count(), 1);
        for tick in 2..20 {
            element.update(&FrameClock::new(tick, 1500.0 + tick as f64));
        }
        assert_eq!(element.active_count(), 1);

        // crossing the interval spawns again
        element.update(&FrameClock::new(20, 2600.0));
        assert_eq!(element.active_count(), 2);
    }

    #[test]
    fn stars_expire_after_their_lifetime() {
        let mut element = ShootingStarsElement::new(
            10_000.0,
            10_000.0,
            ShootingStarsConfig {
                spawn_interval: [1_000_000.0, 1_000_000.0],
                life: [5.0, 5.0],
            },
        );
        element.last_spawn_ms = -2_000_000.0; // force one immediate spawn
        element.update(&FrameClock::new(1, 0.0));
        assert_eq!(element.active_count(), 1);
        for tick in 2..=6 {
            element.update(&FrameClock::new(tick, 0.0));
        }
        assert_eq!(element.active_count(), 0);
    }

    #[test]
    fn trail_is_capped_and_rendered_as_gradient_stroke() {
        let mut element = ShootingStarsElement::new(
            10_000.0,
            10_000.0,
            ShootingStarsConfig {
                spawn_interval: [1.0, 1.0],
                life: [100.0, 100.0],
            },
        );
        for tick in 1..=30 {
            element.update(&FrameClock::new(tick, tick as f64 * 0.1));
        }
        assert!(element.stars.iter().all(|s| s.trail.len() <= TRAIL_CAP));

        let mut surface = PixmapSurface::new(100, 100);
        element.render(&mut surface); // must not panic on off-screen strokes
    }
}

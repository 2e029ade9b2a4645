//! Rain with bottom-edge splash bursts

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::particles::ParticlePool;
use crate::surface::{Paint, Rgba, Stroke, Surface};
use crate::types::RainConfig;
use rand::Rng;

// Splash burst constants
const SPLASH_GRAVITY: f32 = 0.2;
const SPLASH_VY_MIN: f32 = -4.5;
const SPLASH_VY_MAX: f32 = -2.0;
const SPLASH_LIFE_MIN: f32 = 10.0;
const SPLASH_LIFE_MAX: f32 = 20.0;

const RAIN_COLOR: Rgba = Rgba::rgb(174, 194, 224);

struct RainDrop {
    x: f32,
    y: f32,
    length: f32,
    speed: f32,
    opacity: f32,
}

/// Persistent drops that reset to the top on exit, plus a pooled splash
/// burst wherever a drop crosses the bottom edge. Drop lines tilt with the
/// wind to suggest slanted rain.
pub struct RainElement {
    width: f32,
    height: f32,
    config: RainConfig,
    drops: Option<Vec<RainDrop>>,
    splashes: ParticlePool,
    wind: f32,
}

impl RainElement {
    pub fn new(width: f32, height: f32, config: RainConfig) -> Self {
        Self {
            width,
            height,
            config,
            drops: None,
            splashes: ParticlePool::new(100),
            wind: 0.0,
        }
    }

    fn drops_mut(&mut self) -> &mut Vec<RainDrop> {
        let (w, h) = (self.width, self.height);
        let config = &self.config;
        if self.drops.is_none() {
            let mut rng = rand::thread_rng();
            let drops = (0..config.count)
                .map(|_| RainDrop {
                    x: rng.gen::<f32>() * w,
                    y: rng.gen::<f32>() * h,
                    length: random_between(10.0, 30.0),
                    speed: config.speed * random_between(1.0, 2.0),
                    opacity: random_between(0.5, 1.0) * config.opacity,
                })
                .collect();
            self.drops = Some(drops);
        }
        self.drops.as_mut().unwrap()
    }

    /// Splash pool live count, for steady-state assertions
    pub fn splash_count(&self) -> usize {
        self.splashes.active().len()
    }
}

impl Element for RainElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Rain
    }

    fn update(&mut self, _clock: &FrameClock) {
        self.drops_mut();
        let (w, h, wind) = (self.width, self.height, self.wind);
        let mut rng = rand::thread_rng();
        let mut bursts: Vec<f32> = Vec::new();

        if let Some(drops) = self.drops.as_mut() {
            for drop in drops.iter_mut() {
                drop.y += drop.speed;
                drop.x += wind;

                // wind pushes drops off one edge; re-enter on the other
                if wind > 0.0 && drop.x > w {
                    drop.x = -20.0;
                } else if wind < 0.0 && drop.x < -20.0 {
                    drop.x = w;
                }

                if drop.y > h {
                    bursts.push(drop.x);
                    drop.y = -drop.length;
                    drop.x = rng.gen::<f32>() * w;
                }
            }
        }

        for x in bursts {
            let count = rng.gen_range(2..4);
            for _ in 0..count {
                let vx = random_between(-1.0, 1.0);
                let vy = random_between(SPLASH_VY_MIN, SPLASH_VY_MAX);
                let life = random_between(SPLASH_LIFE_MIN, SPLASH_LIFE_MAX);
                self.splashes.get(x, h, vx, vy, life, SPLASH_GRAVITY);
            }
        }

        self.splashes.update();
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let tilt = self.wind * 2.0;
        for drop in self.drops_mut().iter() {
            let stroke = Stroke::solid(RAIN_COLOR.with_alpha(drop.opacity), 1.0);
            surface.stroke_line(drop.x, drop.y, drop.x + tilt, drop.y + drop.length, &stroke);
        }

        let splash = Paint::solid(RAIN_COLOR.with_alpha(0.6));
        for p in self.splashes.active() {
            surface.fill_circle(p.x, p.y, 1.0, &splash);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.drops = None;
        self.splashes.clear();
    }

    fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
    }
}

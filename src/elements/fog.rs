//! Fog and haze layer
//!
//! Soft radial-gradient blobs drifting horizontally. Haze is the same
//! element with an amber palette and smaller radii; only the config
//! differs, never the logic.

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::surface::{Paint, Surface};
use crate::types::FogConfig;
use rand::Rng;

struct FogParticle {
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    opacity: f32,
}

pub struct FogElement {
    width: f32,
    height: f32,
    config: FogConfig,
    particles: Option<Vec<FogParticle>>,
    wind: f32,
}

impl FogElement {
    pub fn new(width: f32, height: f32, config: FogConfig) -> Self {
        Self {
            width,
            height,
            config,
            particles: None,
            wind: 0.0,
        }
    }

    fn particles_mut(&mut self) -> &mut Vec<FogParticle> {
        let (w, h) = (self.width, self.height);
        let config = &self.config;
        if self.particles.is_none() {
            let mut rng = rand::thread_rng();
            let particles = (0..config.count)
                .map(|_| FogParticle {
                    x: rng.gen::<f32>() * w,
                    y: rng.gen::<f32>() * h,
                    radius: random_between(config.radius_range[0], config.radius_range[1]),
                    speed: random_between(config.speed_range[0], config.speed_range[1]),
                    opacity: random_between(config.opacity_range[0], config.opacity_range[1]),
                })
                .collect();
            self.particles = Some(particles);
        }
        self.particles.as_mut().unwrap()
    }
}

impl Element for FogElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Fog
    }

    fn update(&mut self, _clock: &FrameClock) {
        let (w, wind) = (self.width, self.wind);
        for particle in self.particles_mut() {
            particle.x += particle.speed + wind;
            if particle.x > w + particle.radius {
                particle.x = -particle.radius;
            } else if particle.x < -particle.radius {
                particle.x = w + particle.radius;
            }
        }
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let color = self.config.color;
        for particle in self.particles_mut().iter() {
            let paint = Paint::radial(
                particle.x,
                particle.y,
                0.0,
                particle.radius,
                [
                    (0.0, color.with_alpha(particle.opacity)),
                    (1.0, color.with_alpha(0.0)),
                ],
            );
            surface.fill_circle(particle.x, particle.y, particle.radius, &paint);
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles = None;
    }

    fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
    }
}

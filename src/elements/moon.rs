//! Moon with lunar-phase geometry
//!
//! The illumination phase comes from the elapsed time since a reference new
//! moon; the lit region is drawn as a limb arc plus an elliptical terminator
//! whose horizontal semi-axis follows the phase angle.

use super::{Element, ElementKind, FrameClock};
use crate::surface::{Paint, Path, Rgba, Surface};
use crate::types::MoonConfig;
use chrono::{DateTime, Utc};
use std::f32::consts::FRAC_PI_2;

const MOON_RADIUS: f32 = 35.0;

// 2000-01-06T18:14:00Z, a new moon
const NEW_MOON_EPOCH_MS: i64 = 947_182_440_000;
/// Mean synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;
const SYNODIC_MONTH_MS: f64 = SYNODIC_MONTH_DAYS * 86_400_000.0;

// phase closer than this to new/full snaps to the special-case drawing
const PHASE_SNAP: f64 = 0.02;

/// Illumination phase in [0, 1): 0 = new, 0.5 = full, waxing below 0.5
pub fn lunar_phase(date: DateTime<Utc>) -> f64 {
    let elapsed = (date.timestamp_millis() - NEW_MOON_EPOCH_MS) as f64;
    (elapsed / SYNODIC_MONTH_MS).rem_euclid(1.0)
}

pub struct MoonElement {
    width: f32,
    height: f32,
    phase: f64,
}

impl MoonElement {
    /// Phase is fixed at construction from `config.date` (default: now)
    pub fn new(width: f32, height: f32, config: MoonConfig) -> Self {
        let date = config.date.unwrap_or_else(Utc::now);
        Self {
            width,
            height,
            phase: lunar_phase(date),
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Element for MoonElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Moon
    }

    fn update(&mut self, _clock: &FrameClock) {}

    fn render(&mut self, surface: &mut dyn Surface) {
        // new moon: nothing to draw
        if self.phase < PHASE_SNAP || self.phase > 1.0 - PHASE_SNAP {
            return;
        }

        let x = self.width * 0.75;
        let y = self.height * 0.25;
        let r = MOON_RADIUS;
        let moonlight = Rgba::rgb(240, 248, 255);

        // glow brightness follows the illuminated fraction
        let glow_alpha = 0.2 * (self.phase * std::f64::consts::PI).sin() as f32;
        let glow = Paint::radial(
            x,
            y,
            r * 0.5,
            r * 2.0,
            [
                (0.0, moonlight.with_alpha(glow_alpha)),
                (1.0, moonlight.with_alpha(0.0)),
            ],
        );
        surface.fill_rect(x - r * 2.0, y - r * 2.0, r * 4.0, r * 4.0, &glow);

        let fill = Paint::solid(moonlight);
        if (self.phase - 0.5).abs() < PHASE_SNAP {
            // full moon: whole disc plus two faint craters
            surface.fill_circle(x, y, r, &fill);
            let crater = Paint::solid(Rgba::new(200, 210, 220, 0.3));
            surface.fill_circle(x - 10.0, y - 8.0, 6.0, &crater);
            surface.fill_circle(x + 8.0, y + 5.0, 4.0, &crater);
            return;
        }

        // terminator curvature: +r at new, -r at full
        let w = r * (self.phase * std::f64::consts::TAU).cos() as f32;
        let mut path = Path::new();
        if self.phase < 0.5 {
            // waxing: light on the right; limb top -> right -> bottom,
            // terminator back up
            path.arc(x, y, r, -FRAC_PI_2, FRAC_PI_2);
            path.ellipse_arc(x, y, w, r, FRAC_PI_2, -FRAC_PI_2);
        } else {
            // waning: light on the left; limb bottom -> left -> top,
            // terminator back down
            path.arc(x, y, r, FRAC_PI_2, 3.0 * FRAC_PI_2);
            path.ellipse_arc(x, y, -w, r, -FRAC_PI_2, FRAC_PI_2);
        }
        path.close();
        surface.fill_path(&path, &fill);
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

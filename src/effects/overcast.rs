//! Overcast: a heavy cloud ceiling with no visible sky objects

use super::WeatherEffect;
use crate::elements::{BackgroundElement, CloudElement};
use crate::surface::Rgba;
use crate::types::{CloudConfig, CloudStyle, Intensity, TimeMode};

pub fn build(
    width: f32,
    height: f32,
    mode: TimeMode,
    intensity: Intensity,
    wind: f32,
) -> WeatherEffect {
    let mut effect = WeatherEffect::new(intensity, wind);
    let profile = effect.profile();

    let (top, bottom) = match mode {
        TimeMode::Day => (Rgba::rgb(0x77, 0x88, 0x99), Rgba::rgb(0xa0, 0xae, 0xc0)),
        TimeMode::Night => (Rgba::rgb(0x0f, 0x16, 0x24), Rgba::rgb(0x1f, 0x29, 0x37)),
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    effect.push(Box::new(CloudElement::new(
        width,
        height,
        CloudConfig {
            count: profile.scaled_count(7),
            width_range: [100.0, 200.0],
            height_range: [60.0, 100.0],
            speed_range: [0.05, 0.15],
            opacity_range: [0.6, 1.0],
            y_range: [0.0, 0.5],
            style: CloudStyle::Rounded,
        },
        mode,
    )));

    effect
}

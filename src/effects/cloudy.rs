//! Partly cloudy: a denser deck that still lets the sun or moon through

use super::WeatherEffect;
use crate::elements::{BackgroundElement, CloudElement, MoonElement, StarsElement, SunElement};
use crate::surface::Rgba;
use crate::types::{CloudConfig, CloudStyle, Intensity, MoonConfig, StarsConfig, TimeMode};

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
        TimeMode::Day => (Rgba::rgb(0x87, 0xce, 0xeb), Rgba::rgb(0xb0, 0xd4, 0xf1)),
        TimeMode::Night => (Rgba::rgb(0x0f, 0x16, 0x24), Rgba::rgb(0x1f, 0x29, 0x37)),
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    match mode {
        TimeMode::Day => effect.push(Box::new(SunElement::new(width, height))),
        TimeMode::Night => {
            effect.push(Box::new(StarsElement::new(
                width,
                height,
                StarsConfig::default(),
            )));
            effect.push(Box::new(MoonElement::new(
                width,
                height,
                MoonConfig::default(),
            )));
        }
    }

    effect.push(Box::new(CloudElement::new(
        width,
        height,
        CloudConfig {
            count: profile.scaled_count(5),
            width_range: [80.0, 150.0],
            height_range: [30.0, 50.0],
            speed_range: [0.1, 0.3],
            opacity_range: [0.5, 0.8],
            y_range: [0.05, 0.5],
            style: CloudStyle::Rounded,
        },
        mode,
    )));

    effect
}

//! Clear sky: a few thin clouds, sun by day, the full night sky after dark

use super::WeatherEffect;
use crate::elements::{
    BackgroundElement, CloudElement, MoonElement, ShootingStarsElement, StarsElement, SunElement,
};
use crate::surface::Rgba;
use crate::types::{
    CloudConfig, CloudStyle, Intensity, MoonConfig, ShootingStarsConfig, StarsConfig, TimeMode,
};

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
        TimeMode::Day => (Rgba::rgb(0x4a, 0x90, 0xe2), Rgba::rgb(0x87, 0xce, 0xeb)),
        TimeMode::Night => (Rgba::rgb(0x0a, 0x11, 0x28), Rgba::rgb(0x1e, 0x3a, 0x5f)),
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
            effect.push(Box::new(ShootingStarsElement::new(
                width,
                height,
                ShootingStarsConfig::default(),
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
            count: profile.scaled_count(3),
            width_range: [80.0, 120.0],
            height_range: [30.0, 40.0],
            speed_range: [0.1, 0.3],
            opacity_range: [0.4, 0.5],
            y_range: [0.1, 0.5],
            style: CloudStyle::Rounded,
        },
        mode,
    )));

    effect
}

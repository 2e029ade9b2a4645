//! Snowfall against a pale winter sky

use super::WeatherEffect;
use crate::elements::{BackgroundElement, MoonElement, SnowElement};
use crate::surface::Rgba;
use crate::types::{Intensity, MoonConfig, SnowConfig, TimeMode};

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
        TimeMode::Day => (Rgba::rgb(0xe0, 0xe7, 0xef), Rgba::rgb(0xf0, 0xf4, 0xf8)),
        TimeMode::Night => (Rgba::rgb(0x1a, 0x2b, 0x4a), Rgba::rgb(0x2d, 0x45, 0x63)),
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    if mode == TimeMode::Night {
        effect.push(Box::new(MoonElement::new(
            width,
            height,
            MoonConfig::default(),
        )));
    }

    effect.push(Box::new(SnowElement::new(
        width,
        height,
        SnowConfig {
            count: profile.scaled_count(4),
            speed: profile.scaled_speed(1.0),
            opacity: profile.scaled_opacity(0.8),
        },
    )));

    effect
}

//! Fog: a dense gray layer; at night the moon glows faintly behind it

use super::WeatherEffect;
use crate::elements::{BackgroundElement, FogElement, MoonElement};
use crate::surface::Rgba;
use crate::types::{FogConfig, Intensity, MoonConfig, TimeMode};

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
        TimeMode::Day => (Rgba::rgb(0xe8, 0xe8, 0xe8), Rgba::rgb(0xd3, 0xd3, 0xd3)),
        TimeMode::Night => (Rgba::rgb(0x3a, 0x3a, 0x4a), Rgba::rgb(0x2a, 0x2a, 0x3a)),
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    if mode == TimeMode::Night {
        effect.push(Box::new(MoonElement::new(
            width,
            height,
            MoonConfig::default(),
        )));
    }

    effect.push(Box::new(FogElement::new(
        width,
        height,
        FogConfig {
            count: profile.scaled_count(12),
            color: Rgba::rgb(200, 200, 200),
            radius_range: [30.0, 70.0],
            speed_range: [0.2, 0.7],
            opacity_range: [
                profile.scaled_opacity(0.05),
                profile.scaled_opacity(0.2),
            ],
        },
    )));

    effect
}

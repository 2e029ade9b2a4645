//! Haze: amber fog particles under a gold sky that deepens with intensity

use super::WeatherEffect;
use crate::elements::{BackgroundElement, FogElement};
use crate::surface::Rgba;
use crate::types::{FogConfig, Intensity, TimeMode};

pub fn build(
    width: f32,
    height: f32,
    mode: TimeMode,
    intensity: Intensity,
    wind: f32,
) -> WeatherEffect {
    let mut effect = WeatherEffect::new(intensity, wind);
    let profile = effect.profile();

    match mode {
        TimeMode::Day => {
            let stops = match intensity {
                Intensity::Light => [
                    Rgba::rgb(0xd4, 0xaf, 0x37),
                    Rgba::rgb(0xe5, 0xc1, 0x58),
                    Rgba::rgb(0xe8, 0xcc, 0x7c),
                ],
                Intensity::Moderate => [
                    Rgba::rgb(0xb8, 0x86, 0x0b),
                    Rgba::rgb(0xcd, 0x9b, 0x1d),
                    Rgba::rgb(0xda, 0xa5, 0x20),
                ],
                Intensity::Heavy => [
                    Rgba::rgb(0x8b, 0x69, 0x14),
                    Rgba::rgb(0xa0, 0x86, 0x0d),
                    Rgba::rgb(0xb8, 0x86, 0x0b),
                ],
            };
            effect.push(Box::new(BackgroundElement::with_stops(
                width,
                height,
                vec![(0.0, stops[0]), (0.5, stops[1]), (1.0, stops[2])],
            )));
        }
        TimeMode::Night => {
            effect.push(Box::new(BackgroundElement::new(
                width,
                height,
                Rgba::rgb(0x3d, 0x30, 0x20),
                Rgba::rgb(0x5a, 0x4a, 0x35),
            )));
        }
    }

    effect.push(Box::new(FogElement::new(
        width,
        height,
        FogConfig {
            count: profile.scaled_count(10),
            color: Rgba::rgb(180, 140, 80),
            radius_range: [15.0, 40.0],
            speed_range: [0.2, 0.7],
            opacity_range: [
                profile.scaled_opacity(0.05),
                profile.scaled_opacity(0.2),
            ],
        },
    )));

    effect
}

//! Thunderstorm: heavy rain, a dark deck, and the lightning overlay on top

use super::WeatherEffect;
use crate::elements::{BackgroundElement, CloudElement, LightningElement, RainElement};
use crate::surface::Rgba;
use crate::types::{CloudConfig, CloudStyle, Intensity, LightningConfig, RainConfig, TimeMode};

pub fn build(
    width: f32,
    height: f32,
    mode: TimeMode,
    intensity: Intensity,
    wind: f32,
) -> WeatherEffect {
    let mut effect = WeatherEffect::new(intensity, wind);
    let profile = effect.profile();

    // the storm sky ignores day/night; the deck blots out the light anyway
    effect.push(Box::new(BackgroundElement::with_stops(
        width,
        height,
        vec![
            (0.0, Rgba::rgb(0x1a, 0x0f, 0x2e)),
            (0.5, Rgba::rgb(0x2d, 0x1b, 0x4e)),
            (1.0, Rgba::rgb(0x1a, 0x0f, 0x2e)),
        ],
    )));

    effect.push(Box::new(CloudElement::new(
        width,
        height,
        CloudConfig {
            count: profile.scaled_count(5),
            width_range: [120.0, 200.0],
            height_range: [50.0, 80.0],
            speed_range: [0.1, 0.3],
            opacity_range: [0.75, 0.95],
            y_range: [0.0, 0.3],
            style: CloudStyle::Rounded,
        },
        mode,
    )));

    effect.push(Box::new(RainElement::new(
        width,
        height,
        RainConfig {
            count: profile.scaled_count(90),
            speed: profile.scaled_speed(8.0),
            opacity: profile.scaled_opacity(0.9),
        },
    )));

    effect.push(Box::new(LightningElement::new(
        width,
        height,
        LightningConfig::default(),
    )));

    effect
}

//! Rain under a dark cloud deck
//!
//! The daytime sky is a translucent gray wash whose opacity tracks the
//! intensity multiplier, so heavier rain reads as a darker scene.

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

    let (top, bottom) = match mode {
        TimeMode::Day => {
            let base = 0.3 + 0.4 * profile.opacity;
            (
                Rgba::rgb(96, 96, 96).with_alpha((base + 0.2).min(1.0)),
                Rgba::rgb(160, 160, 160).with_alpha(base),
            )
        }
        TimeMode::Night => (Rgba::rgb(0x1a, 0x1a, 0x2e), Rgba::rgb(0x16, 0x21, 0x3e)),
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    effect.push(Box::new(CloudElement::new(
        width,
        height,
        CloudConfig {
            count: profile.scaled_count(4),
            width_range: [100.0, 180.0],
            height_range: [40.0, 60.0],
            speed_range: [0.1, 0.3],
            opacity_range: [0.6, 0.9],
            y_range: [0.0, 0.3],
            style: CloudStyle::Rounded,
        },
        mode,
    )));

    effect.push(Box::new(RainElement::new(
        width,
        height,
        RainConfig {
            count: profile.scaled_count(70),
            speed: profile.scaled_speed(6.0),
            opacity: profile.scaled_opacity(0.8),
        },
    )));

    // night rain flashes the occasional distant strike
    if mode == TimeMode::Night {
        effect.push(Box::new(LightningElement::new(
            width,
            height,
            LightningConfig::default(),
        )));
    }

    effect
}

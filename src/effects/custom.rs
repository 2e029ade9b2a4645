//! Assembly for integrator-registered weather types

use super::WeatherEffect;
use crate::elements::{
    BackgroundElement, CloudElement, FogElement, LightningElement, MoonElement, RainElement,
    ShootingStarsElement, SnowElement, StarsElement, SunElement,
};
use crate::types::{CustomWeatherConfig, ElementSpec, Intensity, TimeMode};

/// Build an effect from a declarative config: the implicit background step,
/// then each declared element whose `modes` restriction admits the current
/// mode, in declaration order. Declared options are used verbatim; intensity
/// only selects the profile the effect reports.
pub fn build_custom(
    config: &CustomWeatherConfig,
    width: f32,
    height: f32,
    mode: TimeMode,
    intensity: Intensity,
    wind: f32,
) -> WeatherEffect {
    let mut effect = WeatherEffect::new(intensity, wind);

    let [top, bottom] = match mode {
        TimeMode::Day => config.background.day,
        TimeMode::Night => config.background.night,
    };
    effect.push(Box::new(BackgroundElement::new(width, height, top, bottom)));

    for element in &config.elements {
        if !element.active_in(mode) {
            continue;
        }
        match &element.spec {
            ElementSpec::Sun => effect.push(Box::new(SunElement::new(width, height))),
            ElementSpec::Moon(c) => {
                effect.push(Box::new(MoonElement::new(width, height, c.clone())))
            }
            ElementSpec::Stars(c) => {
                effect.push(Box::new(StarsElement::new(width, height, c.clone())))
            }
            ElementSpec::ShootingStars(c) => {
                effect.push(Box::new(ShootingStarsElement::new(width, height, c.clone())))
            }
            ElementSpec::Cloud(c) => {
                effect.push(Box::new(CloudElement::new(width, height, c.clone(), mode)))
            }
            ElementSpec::Rain(c) => {
                effect.push(Box::new(RainElement::new(width, height, c.clone())))
            }
            ElementSpec::Snow(c) => {
                effect.push(Box::new(SnowElement::new(width, height, c.clone())))
            }
            ElementSpec::Fog(c) => {
                effect.push(Box::new(FogElement::new(width, height, c.clone())))
            }
            ElementSpec::Lightning(c) => {
                effect.push(Box::new(LightningElement::new(width, height, c.clone())))
            }
            // the background step already ran
            ElementSpec::Background => {}
        }
    }

    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementKind;

    fn aurora_config() -> CustomWeatherConfig {
        CustomWeatherConfig::from_json(
            r##"{
                "background": {
                    "day": ["#4a90e2", "#87ceeb"],
                    "night": ["#0a1128", "#1e3a5f"]
                },
                "elements": [
                    {"type": "stars", "modes": ["night"], "options": {"count": 150}},
                    {"type": "fog", "options": {"count": 8, "color": "#30f0a0"}},
                    {"type": "lightning", "modes": ["night"]}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn mode_restrictions_filter_the_element_list() {
        let config = aurora_config();

        let day = build_custom(&config, 400.0, 300.0, TimeMode::Day, Intensity::Moderate, 0.0);
        assert_eq!(
            day.element_kinds(),
            vec![ElementKind::Background, ElementKind::Fog]
        );

        let night = build_custom(&config, 400.0, 300.0, TimeMode::Night, Intensity::Moderate, 0.0);
        assert_eq!(
            night.element_kinds(),
            vec![
                ElementKind::Background,
                ElementKind::Stars,
                ElementKind::Fog,
                ElementKind::Lightning
            ]
        );
    }

    #[test]
    fn declaration_order_is_preserved() {
        let config = CustomWeatherConfig::from_json(
            r##"{
                "background": {"day": ["#fff", "#eee"], "night": ["#000", "#111"]},
                "elements": [
                    {"type": "rain", "options": {"count": 10, "speed": 5, "opacity": 0.5}},
                    {"type": "cloud", "options": {
                        "count": 2,
                        "widthRange": [80, 120], "heightRange": [30, 40],
                        "speedRange": [0.1, 0.3], "opacityRange": [0.4, 0.5],
                        "yRange": [0.1, 0.5]
                    }}
                ]
            }"##,
        )
        .unwrap();

        let effect = build_custom(&config, 400.0, 300.0, TimeMode::Day, Intensity::Light, 0.0);
        // rain under clouds here, exactly as declared
        assert_eq!(
            effect.element_kinds(),
            vec![ElementKind::Background, ElementKind::Rain, ElementKind::Cloud]
        );
    }
}

//! Weather effect assembly
//!
//! An effect is an ordered element list built once per
//! (weather, mode, intensity) combination. List order is the z-order:
//! later elements render on top of earlier ones.

mod cloudy;
mod custom;
mod foggy;
mod haze;
mod overcast;
mod rainy;
mod snowy;
mod sunny;
mod thunderstorm;

pub use custom::build_custom;

use crate::elements::{Element, ElementKind, FrameClock};
use crate::surface::Surface;
use crate::types::{Intensity, IntensityProfile, TimeMode, WeatherType};

pub struct WeatherEffect {
    elements: Vec<Box<dyn Element>>,
    wind: f32,
    tick: u64,
    profile: IntensityProfile,
}

impl WeatherEffect {
    pub fn new(intensity: Intensity, wind: f32) -> Self {
        Self {
            elements: Vec::new(),
            wind,
            tick: 0,
            profile: intensity.profile(),
        }
    }

    /// Append an element; the effect's current wind is applied immediately
    pub fn push(&mut self, mut element: Box<dyn Element>) {
        element.set_wind(self.wind);
        self.elements.push(element);
    }

    pub fn profile(&self) -> IntensityProfile {
        self.profile
    }

    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
        for element in &mut self.elements {
            element.set_wind(wind);
        }
    }

    /// Advance every element by one tick, in list order
    pub fn update(&mut self, now_ms: f64) {
        self.tick += 1;
        let clock = FrameClock::new(self.tick, now_ms);
        for element in &mut self.elements {
            element.update(&clock);
        }
    }

    /// Draw every element in list order; callers clear the surface first
    pub fn render(&mut self, surface: &mut dyn Surface) {
        for element in &mut self.elements {
            element.render(surface);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        for element in &mut self.elements {
            element.resize(width, height);
        }
    }

    /// Element kinds in z-order, for composition assertions
    pub fn element_kinds(&self) -> Vec<ElementKind> {
        self.elements.iter().map(|e| e.kind()).collect()
    }
}

/// Assemble the fixed recipe for a built-in weather type.
///
/// Callers resolve custom types before reaching here; a `Custom` variant
/// falls back to the sunny recipe.
pub fn build_builtin(
    weather: &WeatherType,
    width: f32,
    height: f32,
    mode: TimeMode,
    intensity: Intensity,
    wind: f32,
) -> WeatherEffect {
    match weather {
        WeatherType::Sunny | WeatherType::Custom(_) => {
            sunny::build(width, height, mode, intensity, wind)
        }
        WeatherType::Cloudy => cloudy::build(width, height, mode, intensity, wind),
        WeatherType::Overcast => overcast::build(width, height, mode, intensity, wind),
        WeatherType::Rainy => rainy::build(width, height, mode, intensity, wind),
        WeatherType::Snowy => snowy::build(width, height, mode, intensity, wind),
        WeatherType::Haze => haze::build(width, height, mode, intensity, wind),
        WeatherType::Foggy => foggy::build(width, height, mode, intensity, wind),
        WeatherType::Thunderstorm => thunderstorm::build(width, height, mode, intensity, wind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(weather: WeatherType, mode: TimeMode) -> Vec<ElementKind> {
        build_builtin(&weather, 700.0, 400.0, mode, Intensity::Moderate, 0.0).element_kinds()
    }

    #[test]
    fn every_recipe_starts_with_the_background() {
        for weather in WeatherType::BUILT_IN {
            for mode in TimeMode::ALL {
                let kinds = kinds(weather.clone(), mode);
                assert_eq!(kinds[0], ElementKind::Background, "{weather} {mode:?}");
            }
        }
    }

    #[test]
    fn sunny_recipes_swap_celestial_bodies() {
        let day = kinds(WeatherType::Sunny, TimeMode::Day);
        assert!(day.contains(&ElementKind::Sun));
        assert!(!day.contains(&ElementKind::Moon));
        assert!(!day.contains(&ElementKind::Stars));

        let night = kinds(WeatherType::Sunny, TimeMode::Night);
        assert!(night.contains(&ElementKind::Moon));
        assert!(night.contains(&ElementKind::Stars));
        assert!(night.contains(&ElementKind::ShootingStars));
        assert!(!night.contains(&ElementKind::Sun));
    }

    #[test]
    fn overcast_hides_celestial_bodies() {
        for mode in TimeMode::ALL {
            let kinds = kinds(WeatherType::Overcast, mode);
            assert!(!kinds.contains(&ElementKind::Sun));
            assert!(!kinds.contains(&ElementKind::Moon));
            assert!(!kinds.contains(&ElementKind::Stars));
        }
    }

    #[test]
    fn thunderstorm_layers_lightning_last() {
        let kinds = kinds(WeatherType::Thunderstorm, TimeMode::Night);
        assert_eq!(*kinds.last().unwrap(), ElementKind::Lightning);
        let cloud = kinds.iter().position(|k| *k == ElementKind::Cloud).unwrap();
        let rain = kinds.iter().position(|k| *k == ElementKind::Rain).unwrap();
        assert!(cloud < rain, "rain renders on top of clouds");
    }

    #[test]
    fn rainy_nights_carry_lightning_but_days_do_not() {
        let night = kinds(WeatherType::Rainy, TimeMode::Night);
        assert_eq!(*night.last().unwrap(), ElementKind::Lightning);
        assert!(!kinds(WeatherType::Rainy, TimeMode::Day).contains(&ElementKind::Lightning));
    }

    #[test]
    fn foggy_night_puts_the_moon_behind_the_fog() {
        let kinds = kinds(WeatherType::Foggy, TimeMode::Night);
        let moon = kinds.iter().position(|k| *k == ElementKind::Moon).unwrap();
        let fog = kinds.iter().position(|k| *k == ElementKind::Fog).unwrap();
        assert!(moon < fog);
    }

    #[test]
    fn intensity_scales_particle_density() {
        let light = build_builtin(
            &WeatherType::Rainy,
            700.0,
            400.0,
            TimeMode::Day,
            Intensity::Light,
            0.0,
        );
        let heavy = build_builtin(
            &WeatherType::Rainy,
            700.0,
            400.0,
            TimeMode::Day,
            Intensity::Heavy,
            0.0,
        );
        assert!(light.profile().particle_count < heavy.profile().particle_count);
    }

    #[test]
    fn wind_propagates_to_pushed_elements() {
        let mut effect = build_builtin(
            &WeatherType::Cloudy,
            700.0,
            400.0,
            TimeMode::Day,
            Intensity::Moderate,
            3.0,
        );
        assert_eq!(effect.wind(), 3.0);
        effect.set_wind(-2.0);
        assert_eq!(effect.wind(), -2.0);
    }

    #[test]
    fn update_advances_the_tick_counter() {
        let mut effect = build_builtin(
            &WeatherType::Snowy,
            200.0,
            200.0,
            TimeMode::Day,
            Intensity::Moderate,
            0.0,
        );
        effect.update(16.0);
        effect.update(32.0);
        assert_eq!(effect.tick, 2);
    }
}

//! Weather axes, intensity table, and custom-weather configuration

use crate::elements::ElementKind;
use crate::error::{Error, Result};
use crate::surface::Rgba;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Built-in weather types, plus integrator-registered custom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherType {
    Sunny,
    Cloudy,
    Overcast,
    Rainy,
    Snowy,
    Haze,
    Foggy,
    Thunderstorm,
    /// A type registered through `Renderer::register_weather`
    Custom(String),
}

impl WeatherType {
    /// All built-in types, in cache-rebuild order
    pub const BUILT_IN: [WeatherType; 8] = [
        WeatherType::Sunny,
        WeatherType::Cloudy,
        WeatherType::Overcast,
        WeatherType::Rainy,
        WeatherType::Snowy,
        WeatherType::Haze,
        WeatherType::Foggy,
        WeatherType::Thunderstorm,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            WeatherType::Sunny => "sunny",
            WeatherType::Cloudy => "cloudy",
            WeatherType::Overcast => "overcast",
            WeatherType::Rainy => "rainy",
            WeatherType::Snowy => "snowy",
            WeatherType::Haze => "haze",
            WeatherType::Foggy => "foggy",
            WeatherType::Thunderstorm => "thunderstorm",
            WeatherType::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, WeatherType::Custom(_))
    }

    /// Known names map to built-ins; anything else becomes `Custom`
    pub fn from_name(s: &str) -> Self {
        match s {
            "sunny" => WeatherType::Sunny,
            "cloudy" => WeatherType::Cloudy,
            "overcast" => WeatherType::Overcast,
            "rainy" => WeatherType::Rainy,
            "snowy" => WeatherType::Snowy,
            "haze" => WeatherType::Haze,
            "foggy" => WeatherType::Foggy,
            "thunderstorm" => WeatherType::Thunderstorm,
            other => WeatherType::Custom(other.to_string()),
        }
    }
}

impl FromStr for WeatherType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WeatherType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(WeatherType::from_name(&s))
    }
}

/// Day/night axis; selects background colors and celestial bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Day,
    Night,
}

impl TimeMode {
    pub const ALL: [TimeMode; 2] = [TimeMode::Day, TimeMode::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Day => "day",
            TimeMode::Night => "night",
        }
    }
}

impl FromStr for TimeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(TimeMode::Day),
            "night" => Ok(TimeMode::Night),
            other => Err(Error::Config(format!("unknown time mode '{other}'"))),
        }
    }
}

/// Weather intensity; scales particle density, speed, and opacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Heavy,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Moderate, Intensity::Heavy];

    /// The static multiplier record for this level
    pub fn profile(&self) -> IntensityProfile {
        match self {
            Intensity::Light => IntensityProfile {
                opacity: 0.6,
                speed: 0.6,
                particle_count: 0.5,
            },
            Intensity::Moderate => IntensityProfile {
                opacity: 0.8,
                speed: 1.0,
                particle_count: 1.0,
            },
            Intensity::Heavy => IntensityProfile {
                opacity: 1.0,
                speed: 1.4,
                particle_count: 1.8,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Heavy => "heavy",
        }
    }
}

impl FromStr for Intensity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Intensity::Light),
            "moderate" => Ok(Intensity::Moderate),
            "heavy" => Ok(Intensity::Heavy),
            other => Err(Error::Config(format!("unknown intensity '{other}'"))),
        }
    }
}

/// Pure multiplier record consumed by every element and effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityProfile {
    pub opacity: f32,
    pub speed: f32,
    pub particle_count: f32,
}

impl IntensityProfile {
    /// Base particle count scaled by the density multiplier, rounded up
    pub fn scaled_count(&self, base: u32) -> u32 {
        (base as f32 * self.particle_count).ceil() as u32
    }

    pub fn scaled_speed(&self, base: f32) -> f32 {
        base * self.speed
    }

    pub fn scaled_opacity(&self, base: f32) -> f32 {
        base * self.opacity
    }
}

/// Renderer construction options; `None` fields fall back to the surface
/// dimensions (then 700x400), 60 fps, and zero wind.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub wind: Option<f32>,
}

// ---------------------------------------------------------------------------
// Per-element configuration

/// Cloud puff draw style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudStyle {
    #[default]
    Rounded,
    Elliptical,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CloudConfig {
    pub count: u32,
    pub width_range: [f32; 2],
    pub height_range: [f32; 2],
    pub speed_range: [f32; 2],
    pub opacity_range: [f32; 2],
    /// Vertical band as fractions of surface height
    pub y_range: [f32; 2],
    #[serde(default)]
    pub style: CloudStyle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RainConfig {
    pub count: u32,
    /// Base fall speed in px per tick; per-drop speed varies by [1, 2)
    pub speed: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SnowConfig {
    /// Flakes emitted per update tick, not a maintained population
    pub count: u32,
    pub speed: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FogConfig {
    pub count: u32,
    #[serde(default = "FogConfig::default_color")]
    pub color: Rgba,
    #[serde(default = "FogConfig::default_radius_range")]
    pub radius_range: [f32; 2],
    #[serde(default = "FogConfig::default_speed_range")]
    pub speed_range: [f32; 2],
    #[serde(default = "FogConfig::default_opacity_range")]
    pub opacity_range: [f32; 2],
}

impl FogConfig {
    fn default_color() -> Rgba {
        Rgba::rgb(200, 200, 200)
    }

    fn default_radius_range() -> [f32; 2] {
        [30.0, 70.0]
    }

    fn default_speed_range() -> [f32; 2] {
        [0.2, 0.7]
    }

    fn default_opacity_range() -> [f32; 2] {
        [0.05, 0.2]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StarsConfig {
    #[serde(default = "StarsConfig::default_count")]
    pub count: u32,
}

impl StarsConfig {
    fn default_count() -> u32 {
        100
    }
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self { count: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShootingStarsConfig {
    /// Wall-clock spawn cadence in milliseconds, re-rolled after each spawn
    #[serde(default = "ShootingStarsConfig::default_spawn_interval")]
    pub spawn_interval: [f64; 2],
    /// Star lifetime range in update ticks
    #[serde(default = "ShootingStarsConfig::default_life")]
    pub life: [f32; 2],
}

impl ShootingStarsConfig {
    fn default_spawn_interval() -> [f64; 2] {
        [2000.0, 5000.0]
    }

    fn default_life() -> [f32; 2] {
        [60.0, 100.0]
    }
}

impl Default for ShootingStarsConfig {
    fn default() -> Self {
        Self {
            spawn_interval: Self::default_spawn_interval(),
            life: Self::default_life(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoonConfig {
    /// Observation date for the lunar phase (RFC 3339 in JSON); `None` = now
    #[serde(default, deserialize_with = "de_rfc3339_opt")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LightningConfig {
    #[serde(default = "LightningConfig::default_color")]
    pub color: Rgba,
}

impl LightningConfig {
    fn default_color() -> Rgba {
        Rgba::rgb(255, 255, 200)
    }
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            color: Self::default_color(),
        }
    }
}

fn de_rfc3339_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error> {
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(de::Error::custom),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Custom weather configuration

/// Day/night background gradient pairs, top color first
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundColors {
    pub day: [Rgba; 2],
    pub night: [Rgba; 2],
}

/// A fully resolved element declaration inside a custom weather config
#[derive(Debug, Clone)]
pub enum ElementSpec {
    Sun,
    Moon(MoonConfig),
    Stars(StarsConfig),
    ShootingStars(ShootingStarsConfig),
    Cloud(CloudConfig),
    Rain(RainConfig),
    Snow(SnowConfig),
    Fog(FogConfig),
    Lightning(LightningConfig),
    /// Accepted for config compatibility; the background step is implicit
    Background,
}

impl ElementSpec {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementSpec::Sun => ElementKind::Sun,
            ElementSpec::Moon(_) => ElementKind::Moon,
            ElementSpec::Stars(_) => ElementKind::Stars,
            ElementSpec::ShootingStars(_) => ElementKind::ShootingStars,
            ElementSpec::Cloud(_) => ElementKind::Cloud,
            ElementSpec::Rain(_) => ElementKind::Rain,
            ElementSpec::Snow(_) => ElementKind::Snow,
            ElementSpec::Fog(_) => ElementKind::Fog,
            ElementSpec::Lightning(_) => ElementKind::Lightning,
            ElementSpec::Background => ElementKind::Background,
        }
    }

    fn from_parts(kind: ElementKind, options: Option<serde_json::Value>) -> Result<Self> {
        fn optional<T>(options: Option<serde_json::Value>) -> Result<T>
        where
            T: serde::de::DeserializeOwned + Default,
        {
            match options {
                Some(v) => Ok(serde_json::from_value(v)?),
                None => Ok(T::default()),
            }
        }

        fn required<T>(kind: ElementKind, options: Option<serde_json::Value>) -> Result<T>
        where
            T: serde::de::DeserializeOwned,
        {
            match options {
                Some(v) => Ok(serde_json::from_value(v)?),
                None => Err(Error::Config(format!(
                    "'{kind}' element requires options"
                ))),
            }
        }

        Ok(match kind {
            ElementKind::Sun => ElementSpec::Sun,
            ElementKind::Moon => ElementSpec::Moon(optional(options)?),
            ElementKind::Stars => ElementSpec::Stars(optional(options)?),
            ElementKind::ShootingStars => ElementSpec::ShootingStars(optional(options)?),
            ElementKind::Cloud => ElementSpec::Cloud(required(kind, options)?),
            ElementKind::Rain => ElementSpec::Rain(required(kind, options)?),
            ElementKind::Snow => ElementSpec::Snow(required(kind, options)?),
            ElementKind::Fog => ElementSpec::Fog(required(kind, options)?),
            ElementKind::Lightning => ElementSpec::Lightning(optional(options)?),
            ElementKind::Background => ElementSpec::Background,
        })
    }

    fn validate(&self) -> Result<()> {
        fn range(kind: ElementKind, name: &str, r: [f32; 2]) -> Result<()> {
            if r[0] > r[1] {
                return Err(Error::Config(format!(
                    "'{kind}' element: inverted {name} [{}, {}]",
                    r[0], r[1]
                )));
            }
            Ok(())
        }

        fn count(kind: ElementKind, n: u32) -> Result<()> {
            if n == 0 {
                return Err(Error::Config(format!("'{kind}' element: count must be non-zero")));
            }
            Ok(())
        }

        fn opacity(kind: ElementKind, v: f32) -> Result<()> {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::Config(format!(
                    "'{kind}' element: opacity {v} outside [0, 1]"
                )));
            }
            Ok(())
        }

        let kind = self.kind();
        match self {
            ElementSpec::Cloud(c) => {
                count(kind, c.count)?;
                range(kind, "widthRange", c.width_range)?;
                range(kind, "heightRange", c.height_range)?;
                range(kind, "speedRange", c.speed_range)?;
                range(kind, "opacityRange", c.opacity_range)?;
                range(kind, "yRange", c.y_range)?;
                opacity(kind, c.opacity_range[0])?;
                opacity(kind, c.opacity_range[1])?;
            }
            ElementSpec::Rain(c) => {
                count(kind, c.count)?;
                opacity(kind, c.opacity)?;
            }
            ElementSpec::Snow(c) => {
                count(kind, c.count)?;
                opacity(kind, c.opacity)?;
            }
            ElementSpec::Fog(c) => {
                count(kind, c.count)?;
                range(kind, "radiusRange", c.radius_range)?;
                range(kind, "speedRange", c.speed_range)?;
                range(kind, "opacityRange", c.opacity_range)?;
                opacity(kind, c.opacity_range[0])?;
                opacity(kind, c.opacity_range[1])?;
            }
            ElementSpec::Stars(c) => count(kind, c.count)?,
            ElementSpec::ShootingStars(c) => {
                if c.spawn_interval[0] > c.spawn_interval[1] {
                    return Err(Error::Config(format!(
                        "'{kind}' element: inverted spawnInterval"
                    )));
                }
                range(kind, "life", c.life)?;
                if c.life[0] <= 0.0 {
                    return Err(Error::Config(format!(
                        "'{kind}' element: life must be positive"
                    )));
                }
            }
            ElementSpec::Sun
            | ElementSpec::Moon(_)
            | ElementSpec::Lightning(_)
            | ElementSpec::Background => {}
        }
        Ok(())
    }
}

/// One entry in a custom weather's element list
#[derive(Debug, Clone)]
pub struct ElementConfig {
    pub spec: ElementSpec,
    /// Restrict this element to the listed modes; `None` = both
    pub modes: Option<Vec<TimeMode>>,
}

impl ElementConfig {
    pub fn new(spec: ElementSpec) -> Self {
        Self { spec, modes: None }
    }

    pub fn with_modes(spec: ElementSpec, modes: impl IntoIterator<Item = TimeMode>) -> Self {
        Self {
            spec,
            modes: Some(modes.into_iter().collect()),
        }
    }

    pub fn active_in(&self, mode: TimeMode) -> bool {
        match &self.modes {
            Some(modes) => modes.contains(&mode),
            None => true,
        }
    }
}

impl<'de> Deserialize<'de> for ElementConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Raw {
            #[serde(rename = "type")]
            kind: ElementKind,
            #[serde(default)]
            modes: Option<Vec<TimeMode>>,
            #[serde(default)]
            options: Option<serde_json::Value>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let spec = ElementSpec::from_parts(raw.kind, raw.options).map_err(de::Error::custom)?;
        Ok(ElementConfig {
            spec,
            modes: raw.modes,
        })
    }
}

/// Declarative description of a weather type not built in
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomWeatherConfig {
    pub background: BackgroundColors,
    pub elements: Vec<ElementConfig>,
}

impl CustomWeatherConfig {
    /// Parse from the host-facing JSON shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Eager semantic validation, run at registration time
    pub fn validate(&self) -> Result<()> {
        if self.elements.is_empty() {
            return Err(Error::Config("element list is empty".to_string()));
        }
        for element in &self.elements {
            element.spec.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_multipliers_are_monotonic() {
        let light = Intensity::Light.profile();
        let moderate = Intensity::Moderate.profile();
        let heavy = Intensity::Heavy.profile();
        assert!(heavy.particle_count > moderate.particle_count);
        assert!(moderate.particle_count > light.particle_count);
        assert!(heavy.speed > moderate.speed && moderate.speed > light.speed);
        assert!(heavy.opacity > moderate.opacity && moderate.opacity > light.opacity);
    }

    #[test]
    fn scaled_count_rounds_up() {
        assert_eq!(Intensity::Light.profile().scaled_count(100), 50);
        assert_eq!(Intensity::Moderate.profile().scaled_count(100), 100);
        assert_eq!(Intensity::Heavy.profile().scaled_count(100), 180);
        assert_eq!(Intensity::Light.profile().scaled_count(3), 2);
        assert_eq!(Intensity::Heavy.profile().scaled_count(3), 6);
    }

    #[test]
    fn weather_type_parses_known_and_custom_names() {
        assert_eq!("thunderstorm".parse::<WeatherType>().unwrap(), WeatherType::Thunderstorm);
        assert_eq!(
            "aurora".parse::<WeatherType>().unwrap(),
            WeatherType::Custom("aurora".to_string())
        );
        assert_eq!(WeatherType::Custom("aurora".into()).as_str(), "aurora");
    }

    #[test]
    fn custom_config_parses_from_json() {
        let json = r##"{
            "background": {"day": ["#4a90e2", "#87ceeb"], "night": ["#0a1128", "#1e3a5f"]},
            "elements": [
                {"type": "sun", "modes": ["day"]},
                {"type": "stars", "modes": ["night"], "options": {"count": 50}},
                {"type": "cloud", "options": {
                    "count": 3,
                    "widthRange": [80, 120], "heightRange": [30, 40],
                    "speedRange": [0.1, 0.3], "opacityRange": [0.4, 0.5],
                    "yRange": [0.1, 0.5], "style": "elliptical"
                }}
            ]
        }"##;
        let config = CustomWeatherConfig::from_json(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.elements.len(), 3);
        assert!(matches!(config.elements[0].spec, ElementSpec::Sun));
        assert!(config.elements[0].active_in(TimeMode::Day));
        assert!(!config.elements[0].active_in(TimeMode::Night));
        match &config.elements[2].spec {
            ElementSpec::Cloud(c) => assert_eq!(c.style, CloudStyle::Elliptical),
            other => panic!("expected cloud, got {:?}", other.kind()),
        }
    }

    #[test]
    fn cloud_without_options_fails_to_parse() {
        let json = r##"{
            "background": {"day": ["#fff", "#fff"], "night": ["#000", "#000"]},
            "elements": [{"type": "cloud"}]
        }"##;
        assert!(CustomWeatherConfig::from_json(json).is_err());
    }

    #[test]
    fn validation_rejects_empty_and_degenerate_configs() {
        let empty = CustomWeatherConfig {
            background: BackgroundColors {
                day: [Rgba::rgb(255, 255, 255); 2],
                night: [Rgba::rgb(0, 0, 0); 2],
            },
            elements: vec![],
        };
        assert!(empty.validate().is_err());

        let inverted = CustomWeatherConfig {
            background: BackgroundColors {
                day: [Rgba::rgb(255, 255, 255); 2],
                night: [Rgba::rgb(0, 0, 0); 2],
            },
            elements: vec![ElementConfig::new(ElementSpec::Cloud(CloudConfig {
                count: 2,
                width_range: [120.0, 80.0],
                height_range: [30.0, 40.0],
                speed_range: [0.1, 0.3],
                opacity_range: [0.4, 0.5],
                y_range: [0.1, 0.5],
                style: CloudStyle::Rounded,
            }))],
        };
        assert!(matches!(inverted.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn moon_config_accepts_rfc3339_date() {
        let json = r##"{"date": "2000-01-21T04:40:00Z"}"##;
        let config: MoonConfig = serde_json::from_str(json).unwrap();
        assert!(config.date.is_some());
        assert!(serde_json::from_str::<MoonConfig>(r##"{"date": "not a date"}"##).is_err());
    }
}

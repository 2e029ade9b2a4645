//! Visual elements
//!
//! Each element is an independently animated primitive implementing the
//! [`Element`] lifecycle contract; effects compose ordered lists of them.

pub mod background;
pub mod cloud;
pub mod fog;
pub mod lightning;
pub mod moon;
pub mod rain;
pub mod shooting_stars;
pub mod snow;
pub mod stars;
pub mod sun;

pub use background::BackgroundElement;
pub use cloud::CloudElement;
pub use fog::FogElement;
pub use lightning::LightningElement;
pub use moon::MoonElement;
pub use rain::RainElement;
pub use shooting_stars::ShootingStarsElement;
pub use snow::SnowElement;
pub use stars::StarsElement;
pub use sun::SunElement;

use crate::surface::Surface;
use serde::Deserialize;
use std::fmt;

/// Closed set of element kinds, used for custom-config dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Background,
    Sun,
    Moon,
    Stars,
    ShootingStars,
    Cloud,
    Rain,
    Snow,
    Fog,
    Lightning,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Background => "background",
            ElementKind::Sun => "sun",
            ElementKind::Moon => "moon",
            ElementKind::Stars => "stars",
            ElementKind::ShootingStars => "shooting-stars",
            ElementKind::Cloud => "cloud",
            ElementKind::Rain => "rain",
            ElementKind::Snow => "snow",
            ElementKind::Fog => "fog",
            ElementKind::Lightning => "lightning",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update-time inputs: motion advances per tick, rare spawn cadence
/// (shooting stars) reads the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Monotonic frame counter
    pub tick: u64,
    /// Wall-clock timestamp in milliseconds
    pub now_ms: f64,
}

impl FrameClock {
    pub fn new(tick: u64, now_ms: f64) -> Self {
        Self { tick, now_ms }
    }
}

/// Common lifecycle contract implemented by every visual primitive.
///
/// `update` mutates state only; `render` draws only (re-rendering without an
/// intervening update redraws the last state, though lazy per-size state may
/// materialize on first call). `resize` invalidates any state that baked in
/// absolute pixel coordinates.
pub trait Element {
    fn kind(&self) -> ElementKind;

    fn update(&mut self, clock: &FrameClock);

    fn render(&mut self, surface: &mut dyn Surface);

    fn resize(&mut self, width: f32, height: f32);

    /// Bias horizontal particle drift; only drifting elements override this
    fn set_wind(&mut self, _wind: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_deserializes_kebab_case() {
        let kind: ElementKind = serde_json::from_str("\"shooting-stars\"").unwrap();
        assert_eq!(kind, ElementKind::ShootingStars);
        assert_eq!(kind.as_str(), "shooting-stars");
        assert!(serde_json::from_str::<ElementKind>("\"meteor\"").is_err());
    }
}

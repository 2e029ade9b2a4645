//! Animated weather scenes rendered onto a 2D surface.
//!
//! A [`Renderer`] owns a drawing surface and composes weather effects
//! (sun, clouds, rain, snow, fog, lightning, stars, moon phases) from
//! independently animated elements, advanced by a host-driven frame loop.
//!
//! ```
//! use weatherscape::{
//!     Intensity, PixmapSurface, RenderOptions, Renderer, TimeMode, WeatherType,
//! };
//!
//! # fn main() -> weatherscape::Result<()> {
//! let surface = PixmapSurface::new(700, 400);
//! let mut renderer = Renderer::new(surface, RenderOptions::default())?;
//! renderer.render(WeatherType::Rainy, TimeMode::Night, Intensity::Heavy);
//! renderer.start();
//! for _ in 0..10 {
//!     renderer.tick();
//! }
//! let frame = renderer.surface().image();
//! assert_eq!(frame.width(), 700);
//! # Ok(())
//! # }
//! ```

pub mod effects;
pub mod elements;
pub mod error;
pub mod math;
pub mod particles;
pub mod pixmap;
pub mod renderer;
pub mod surface;
pub mod types;

pub use effects::WeatherEffect;
pub use error::{Error, Result};
pub use pixmap::PixmapSurface;
pub use renderer::Renderer;
pub use surface::{GradientStop, Paint, Path, Rgba, Stroke, Surface};
pub use types::{
    CustomWeatherConfig, Intensity, IntensityProfile, RenderOptions, TimeMode, WeatherType,
};

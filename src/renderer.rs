//! Top-level coordinator: effect cache, frame loop, and public setters

use crate::effects::{build_builtin, build_custom, WeatherEffect};
use crate::error::{Error, Result};
use crate::surface::Surface;
use crate::types::{CustomWeatherConfig, Intensity, RenderOptions, TimeMode, WeatherType};
use std::collections::HashMap;
use std::time::Instant;

const DEFAULT_WIDTH: u32 = 700;
const DEFAULT_HEIGHT: u32 = 400;
const DEFAULT_FPS: u32 = 60;

type EffectKey = (WeatherType, TimeMode, Intensity);

/// Owns the drawing surface and a cache of assembled effects, keyed by
/// (weather, mode, intensity). Effects are created lazily on first render
/// and rebuilt eagerly when the surface is resized, so live particle state
/// survives axis switches but never outlives a size change.
pub struct Renderer<S: Surface> {
    surface: S,
    width: f32,
    height: f32,
    fps: u32,
    wind: f32,
    weather: WeatherType,
    mode: TimeMode,
    intensity: Intensity,
    cache: HashMap<EffectKey, WeatherEffect>,
    current: Option<EffectKey>,
    custom: HashMap<String, CustomWeatherConfig>,
    running: bool,
    last_frame_ms: Option<f64>,
    epoch: Instant,
}

impl<S: Surface> Renderer<S> {
    pub fn new(mut surface: S, options: RenderOptions) -> Result<Self> {
        let width = options.width.unwrap_or_else(|| {
            if surface.width() > 0 {
                surface.width()
            } else {
                DEFAULT_WIDTH
            }
        });
        let height = options.height.unwrap_or_else(|| {
            if surface.height() > 0 {
                surface.height()
            } else {
                DEFAULT_HEIGHT
            }
        });
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let fps = options.fps.unwrap_or(DEFAULT_FPS);
        if fps == 0 {
            return Err(Error::InvalidFps);
        }

        if surface.width() != width || surface.height() != height {
            surface.resize(width, height);
        }

        Ok(Self {
            surface,
            width: width as f32,
            height: height as f32,
            fps,
            wind: options.wind.unwrap_or(0.0),
            weather: WeatherType::Sunny,
            mode: TimeMode::Day,
            intensity: Intensity::Moderate,
            cache: HashMap::new(),
            current: None,
            custom: HashMap::new(),
            running: false,
            last_frame_ms: None,
            epoch: Instant::now(),
        })
    }

    /// Select (building if necessary) the effect for the given axes and
    /// draw one frame of it
    pub fn render(&mut self, weather: WeatherType, mode: TimeMode, intensity: Intensity) {
        self.weather = weather.clone();
        self.mode = mode;
        self.intensity = intensity;

        let key = (weather, mode, intensity);
        self.ensure_cached(&key);
        if let Some(effect) = self.cache.get_mut(&key) {
            effect.set_wind(self.wind);
        }
        self.current = Some(key);
        self.draw();
    }

    fn ensure_cached(&mut self, key: &EffectKey) {
        if self.cache.contains_key(key) {
            return;
        }
        let effect = self.build_effect(key);
        self.cache.insert(key.clone(), effect);
    }

    fn build_effect(&self, key: &EffectKey) -> WeatherEffect {
        let (weather, mode, intensity) = key;
        if let WeatherType::Custom(name) = weather {
            if let Some(config) = self.custom.get(name) {
                return build_custom(config, self.width, self.height, *mode, *intensity, self.wind);
            }
            log::warn!("unknown weather type '{name}', falling back to sunny");
        }
        build_builtin(weather, self.width, self.height, *mode, *intensity, self.wind)
    }

    // -----------------------------------------------------------------------
    // Frame loop

    /// Mark the loop running; the host drives frames via [`frame`] or
    /// [`tick`]. Re-entrant no-op if already running.
    ///
    /// [`frame`]: Renderer::frame
    /// [`tick`]: Renderer::tick
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accepting frames; idempotent
    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Host-driven frame callback. Admits a frame only if at least
    /// `1000 / fps` ms elapsed since the last accepted one, so the
    /// effective rate is throttled independent of the host's native rate.
    pub fn frame(&mut self, timestamp_ms: f64) {
        if !self.running {
            return;
        }
        let interval = 1000.0 / self.fps as f64;
        if let Some(last) = self.last_frame_ms {
            if timestamp_ms - last < interval {
                return;
            }
        }
        self.last_frame_ms = Some(timestamp_ms);
        self.update(timestamp_ms);
        self.draw();
    }

    /// Frame entry point for hosts driving the loop from a plain timer
    pub fn tick(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.frame(now_ms);
    }

    fn update(&mut self, now_ms: f64) {
        if let Some(key) = &self.current {
            if let Some(effect) = self.cache.get_mut(key) {
                effect.update(now_ms);
            }
        }
    }

    fn draw(&mut self) {
        self.surface.clear();
        if let Some(key) = &self.current {
            if let Some(effect) = self.cache.get_mut(key) {
                effect.render(&mut self.surface);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Setters

    /// Resize the surface and rebuild the whole effect cache eagerly, then
    /// re-render the current selection. Degenerate dimensions are rejected
    /// with a warning, matching the validation in [`new`].
    ///
    /// [`new`]: Renderer::new
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to degenerate {width}x{height}");
            return;
        }
        self.width = width as f32;
        self.height = height as f32;
        self.surface.resize(width, height);

        log::debug!("rebuilding effect cache for {width}x{height}");
        self.cache.clear();
        for weather in WeatherType::BUILT_IN {
            for mode in TimeMode::ALL {
                for intensity in Intensity::ALL {
                    let key = (weather.clone(), mode, intensity);
                    let effect = self.build_effect(&key);
                    self.cache.insert(key, effect);
                }
            }
        }
        let names: Vec<String> = self.custom.keys().cloned().collect();
        for name in names {
            for mode in TimeMode::ALL {
                for intensity in Intensity::ALL {
                    let key = (WeatherType::Custom(name.clone()), mode, intensity);
                    let effect = self.build_effect(&key);
                    self.cache.insert(key, effect);
                }
            }
        }

        self.render(self.weather.clone(), self.mode, self.intensity);
    }

    pub fn set_weather_type(&mut self, weather: WeatherType) {
        self.render(weather, self.mode, self.intensity);
    }

    pub fn set_mode(&mut self, mode: TimeMode) {
        self.render(self.weather.clone(), mode, self.intensity);
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.render(self.weather.clone(), self.mode, intensity);
    }

    /// Wind does not change which effect is selected, so it is pushed into
    /// the live effect directly
    pub fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
        if let Some(key) = &self.current {
            if let Some(effect) = self.cache.get_mut(key) {
                effect.set_wind(wind);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Custom weather

    /// Register a custom weather type and eagerly pre-build its six
    /// (mode, intensity) instances. Built-in names are reserved.
    pub fn register_weather(&mut self, name: &str, config: CustomWeatherConfig) -> Result<()> {
        if WeatherType::from_name(name).is_builtin() {
            return Err(Error::ReservedName(name.to_string()));
        }
        config.validate()?;
        log::debug!("registering custom weather '{name}'");
        self.custom.insert(name.to_string(), config);
        for mode in TimeMode::ALL {
            for intensity in Intensity::ALL {
                let key = (WeatherType::Custom(name.to_string()), mode, intensity);
                let effect = self.build_effect(&key);
                self.cache.insert(key, effect);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors

    pub fn weather_type(&self) -> &WeatherType {
        &self.weather
    }

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn wind(&self) -> f32 {
        self.wind
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The currently selected effect, if one has been rendered
    pub fn current_effect(&self) -> Option<&WeatherEffect> {
        self.current.as_ref().and_then(|key| self.cache.get(key))
    }

    /// Clear the surface without touching the cache or selection
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Stop the loop, clear the surface, and drop everything. Consuming:
    /// a destroyed renderer cannot be restarted.
    pub fn destroy(mut self) {
        self.stop();
        self.surface.clear();
        self.cache.clear();
        self.current = None;
    }
}

//! Drifting cloud layer

use super::{Element, ElementKind, FrameClock};
use crate::math::random_between;
use crate::surface::{Paint, Rgba, Surface};
use crate::types::{CloudConfig, CloudStyle, TimeMode};
use rand::Rng;

struct Cloud {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    opacity: f32,
}

/// Clouds drift horizontally at `speed + wind` and wrap around both edges.
/// Lazily initialized; resize regenerates the deck.
pub struct CloudElement {
    width: f32,
    height: f32,
    config: CloudConfig,
    clouds: Option<Vec<Cloud>>,
    wind: f32,
    mode: TimeMode,
}

impl CloudElement {
    pub fn new(width: f32, height: f32, config: CloudConfig, mode: TimeMode) -> Self {
        Self {
            width,
            height,
            config,
            clouds: None,
            wind: 0.0,
            mode,
        }
    }

    fn clouds_mut(&mut self) -> &mut Vec<Cloud> {
        let (w, h) = (self.width, self.height);
        let config = &self.config;
        if self.clouds.is_none() {
            let mut rng = rand::thread_rng();
            let y_min = h * config.y_range[0];
            let y_max = h * config.y_range[1];
            let clouds = (0..config.count)
                .map(|_| Cloud {
                    x: rng.gen::<f32>() * w,
                    y: random_between(y_min, y_max),
                    width: random_between(config.width_range[0], config.width_range[1]),
                    height: random_between(config.height_range[0], config.height_range[1]),
                    speed: random_between(config.speed_range[0], config.speed_range[1]),
                    opacity: random_between(config.opacity_range[0], config.opacity_range[1]),
                })
                .collect();
            self.clouds = Some(clouds);
        }
        self.clouds.as_mut().unwrap()
    }

    fn draw_rounded(surface: &mut dyn Surface, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        surface.fill_circle(x, y, h * 0.6, paint);
        surface.fill_circle(x + w * 0.3, y - h * 0.2, h * 0.7, paint);
        surface.fill_circle(x + w * 0.7, y, h * 0.6, paint);
        surface.fill_circle(x + w * 0.5, y + h * 0.2, h * 0.5, paint);
    }

    fn draw_elliptical(surface: &mut dyn Surface, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        surface.fill_ellipse(x + w * 0.15, y + h * 0.5, w * 0.25, h * 0.5, paint);
        surface.fill_ellipse(x + w * 0.4, y, w * 0.3, h * 0.6, paint);
        surface.fill_ellipse(x + w * 0.65, y + h * 0.3, w * 0.28, h * 0.55, paint);
        surface.fill_ellipse(x + w * 0.85, y + h * 0.5, w * 0.25, h * 0.5, paint);
    }

    #[cfg(test)]
    fn positions(&self) -> Vec<f32> {
        self.clouds
            .as_ref()
            .map(|clouds| clouds.iter().map(|c| c.x).collect())
            .unwrap_or_default()
    }
}

impl Element for CloudElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Cloud
    }

    fn update(&mut self, _clock: &FrameClock) {
        let (w, wind) = (self.width, self.wind);
        for cloud in self.clouds_mut() {
            cloud.x += cloud.speed + wind;
            if cloud.x > w + cloud.width {
                cloud.x = -cloud.width;
            } else if cloud.x < -cloud.width {
                cloud.x = w + cloud.width;
            }
        }
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        let mode = self.mode;
        let style = self.config.style;
        for cloud in self.clouds_mut().iter() {
            let color = match mode {
                TimeMode::Night => Rgba::new(70, 80, 90, cloud.opacity),
                TimeMode::Day => Rgba::new(255, 255, 255, cloud.opacity),
            };
            let paint = Paint::solid(color);
            match style {
                CloudStyle::Rounded => {
                    Self::draw_rounded(surface, cloud.x, cloud.y, cloud.width, cloud.height, &paint)
                }
                CloudStyle::Elliptical => Self::draw_elliptical(
                    surface,
                    cloud.x,
                    cloud.y,
                    cloud.width,
                    cloud.height,
                    &paint,
                ),
            }
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.clouds = None;
    }

    fn set_wind(&mut self, wind: f32) {
        self.wind = wind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(count: u32) -> CloudConfig {
        CloudConfig {
            count,
            width_range: [80.0, 120.0],
            height_range: [30.0, 40.0],
            speed_range: [0.1, 0.3],
            opacity_range: [0.4, 0.5],
            y_range: [0.1, 0.5],
            style: CloudStyle::Rounded,
        }
    }

    #[test]
    fn wind_biases_horizontal_drift() {
        let clock = FrameClock::new(1, 0.0);

        let mut cloud = CloudElement::new(10_000.0, 400.0, test_config(5), TimeMode::Day);
        cloud.update(&clock); // lazy init + first drift
        let before = cloud.positions();
        cloud.set_wind(5.0);
        cloud.update(&clock);
        let after = cloud.positions();

        // per-tick delta is speed + wind, bounded by the speed range
        for (b, a) in before.iter().zip(after.iter()) {
            let delta = a - b;
            assert!(delta >= 0.1 + 5.0, "delta = {delta}");
            assert!(delta <= 0.3 + 5.0, "delta = {delta}");
        }
    }

    #[test]
    fn clouds_wrap_around_both_edges() {
        let mut element = CloudElement::new(100.0, 100.0, test_config(1), TimeMode::Day);
        element.update(&FrameClock::new(1, 0.0));

        // push past the right edge
        {
            let clouds = element.clouds.as_mut().unwrap();
            clouds[0].x = 100.0 + clouds[0].width + 1.0;
            clouds[0].speed = 1.0;
        }
        element.update(&FrameClock::new(2, 0.0));
        let w = element.clouds.as_ref().unwrap()[0].width;
        assert_eq!(element.positions()[0], -w);

        // push past the left edge with negative wind
        element.set_wind(-10.0);
        {
            let clouds = element.clouds.as_mut().unwrap();
            clouds[0].x = -clouds[0].width + 5.0;
        }
        element.update(&FrameClock::new(3, 0.0));
        assert_eq!(element.positions()[0], 100.0 + w);
    }

    #[test]
    fn resize_drops_the_deck() {
        let mut element = CloudElement::new(500.0, 500.0, test_config(3), TimeMode::Night);
        element.update(&FrameClock::new(1, 0.0));
        assert_eq!(element.positions().len(), 3);
        element.resize(100.0, 100.0);
        assert!(element.clouds.is_none());
    }
}

//! Drawing-surface abstraction and paint model
//!
//! Every element draws through the [`Surface`] trait; paint state is passed
//! per call, so implementations carry no ambient fill/stroke/alpha state.

use crate::error::Error;
use serde::de::{self, Deserialize, Deserializer};
use std::str::FromStr;

/// 8-bit RGB color with a floating-point alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse a `#rgb` or `#rrggbb` hex literal
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let parse = |sub: &str| {
            u8::from_str_radix(sub, 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        match hex.len() {
            3 => {
                let expand = |sub: &str| parse(&sub.repeat(2));
                Ok(Self::rgb(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            6 => Ok(Self::rgb(
                parse(&hex[0..2])?,
                parse(&hex[2..4])?,
                parse(&hex[4..6])?,
            )),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(de::Error::custom)
    }
}

/// One stop of a gradient paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in [0, 1]
    pub offset: f32,
    pub color: Rgba,
}

impl From<(f32, Rgba)> for GradientStop {
    fn from((offset, color): (f32, Rgba)) -> Self {
        Self { offset, color }
    }
}

/// Fill/stroke paint: a solid color or a gradient evaluated per pixel
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stops: Vec<GradientStop>,
    },
    Radial {
        cx: f32,
        cy: f32,
        r1: f32,
        r2: f32,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn solid(color: Rgba) -> Self {
        Paint::Solid(color)
    }

    pub fn linear(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stops: impl IntoIterator<Item = (f32, Rgba)>,
    ) -> Self {
        Paint::Linear {
            x1,
            y1,
            x2,
            y2,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    pub fn radial(
        cx: f32,
        cy: f32,
        r1: f32,
        r2: f32,
        stops: impl IntoIterator<Item = (f32, Rgba)>,
    ) -> Self {
        Paint::Radial {
            cx,
            cy,
            r1,
            r2,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Evaluate the paint at a pixel position
    pub fn color_at(&self, x: f32, y: f32) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear { x1, y1, x2, y2, stops } => {
                let dx = x2 - x1;
                let dy = y2 - y1;
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    ((x - x1) * dx + (y - y1) * dy) / len_sq
                };
                interpolate_stops(stops, t.clamp(0.0, 1.0))
            }
            Paint::Radial { cx, cy, r1, r2, stops } => {
                let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
                let span = r2 - r1;
                let t = if span.abs() <= f32::EPSILON {
                    1.0
                } else {
                    (d - r1) / span
                };
                interpolate_stops(stops, t.clamp(0.0, 1.0))
            }
        }
    }
}

fn interpolate_stops(stops: &[GradientStop], t: f32) -> Rgba {
    match stops {
        [] => Rgba::new(0, 0, 0, 0.0),
        [only] => only.color,
        _ => {
            let first = &stops[0];
            if t <= first.offset {
                return first.color;
            }
            for pair in stops.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if t <= b.offset {
                    let span = b.offset - a.offset;
                    let f = if span <= f32::EPSILON {
                        1.0
                    } else {
                        (t - a.offset) / span
                    };
                    return lerp_color(a.color, b.color, f);
                }
            }
            stops[stops.len() - 1].color
        }
    }
}

fn lerp_color(a: Rgba, b: Rgba, f: f32) -> Rgba {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
    Rgba {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
        a: a.a + (b.a - a.a) * f,
    }
}

/// Stroke parameters for line drawing (round caps)
#[derive(Debug, Clone)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
}

impl Stroke {
    pub fn new(paint: Paint, width: f32) -> Self {
        Self { paint, width }
    }

    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            paint: Paint::Solid(color),
            width,
        }
    }
}

/// A fillable path built from line and arc segments, flattened to polygons.
///
/// Arcs accept a negative horizontal semi-axis and a decreasing angle range,
/// which is what the lunar terminator construction relies on.
#[derive(Debug, Clone, Default)]
pub struct Path {
    subpaths: Vec<Vec<[f32; 2]>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.subpaths.push(vec![[x, y]]);
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.current().push([x, y]);
    }

    /// Append a circular arc sampled from `start` to `end` (radians)
    pub fn arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32) {
        self.ellipse_arc(cx, cy, r, r, start, end);
    }

    /// Append an elliptical arc; `rx` may be negative to mirror horizontally
    pub fn ellipse_arc(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, end: f32) {
        let sweep = (end - start).abs();
        let steps = ((sweep / std::f32::consts::TAU) * 64.0).ceil().max(8.0) as usize;
        let sub = self.current();
        for i in 0..=steps {
            let t = start + (end - start) * (i as f32 / steps as f32);
            sub.push([cx + rx * t.cos(), cy + ry * t.sin()]);
        }
    }

    /// Close the current subpath (polygons are implicitly closed when filled)
    pub fn close(&mut self) {
        if let Some(sub) = self.subpaths.last_mut() {
            if let Some(&first) = sub.first() {
                sub.push(first);
            }
        }
    }

    /// Flattened subpaths, each an implicitly closed polygon
    pub fn polygons(&self) -> &[Vec<[f32; 2]>] {
        &self.subpaths
    }

    fn current(&mut self) -> &mut Vec<[f32; 2]> {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        self.subpaths.last_mut().unwrap()
    }
}

/// Immediate-mode 2D drawing capability consumed by every element.
///
/// Coordinates are pixels with the origin at the top-left corner.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replace the backing store with a blank one of the given size
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint);
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, paint: &Paint);
    fn fill_path(&mut self, path: &Path, paint: &Paint);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgba::from_hex("#4a90e2").unwrap(), Rgba::rgb(0x4a, 0x90, 0xe2));
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::rgb(255, 255, 255));
        assert!(Rgba::from_hex("4a90e2").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#gggggg").is_err());
    }

    #[test]
    fn hex_deserializes_from_json_string() {
        let c: Rgba = serde_json::from_str("\"#0a1128\"").unwrap();
        assert_eq!(c, Rgba::rgb(0x0a, 0x11, 0x28));
    }

    #[test]
    fn linear_gradient_interpolation() {
        let p = Paint::linear(
            0.0,
            0.0,
            0.0,
            100.0,
            [(0.0, Rgba::rgb(0, 0, 0)), (1.0, Rgba::rgb(200, 100, 50))],
        );
        assert_eq!(p.color_at(50.0, 0.0), Rgba::rgb(0, 0, 0));
        assert_eq!(p.color_at(0.0, 100.0), Rgba::rgb(200, 100, 50));
        let mid = p.color_at(0.0, 50.0);
        assert_eq!(mid, Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn radial_gradient_clamps_outside_radius() {
        let p = Paint::radial(
            0.0,
            0.0,
            0.0,
            10.0,
            [(0.0, Rgba::new(255, 255, 255, 1.0)), (1.0, Rgba::new(255, 255, 255, 0.0))],
        );
        assert_eq!(p.color_at(0.0, 0.0).a, 1.0);
        assert_eq!(p.color_at(100.0, 0.0).a, 0.0);
    }

    #[test]
    fn path_line_segments_build_a_subpath() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.line_to(10.0, 10.0);
        path.close();
        let expected: &[Vec<[f32; 2]>] =
            &[vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]];
        assert_eq!(path.polygons(), expected);
    }

    #[test]
    fn path_arc_flattens_into_polygon() {
        let mut path = Path::new();
        path.arc(0.0, 0.0, 10.0, 0.0, std::f32::consts::PI);
        path.close();
        let polys = path.polygons();
        assert_eq!(polys.len(), 1);
        assert!(polys[0].len() >= 9);
        // endpoints of the half circle
        let first = polys[0][0];
        assert!((first[0] - 10.0).abs() < 1e-3 && first[1].abs() < 1e-3);
    }
}

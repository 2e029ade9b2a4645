//! Software rasterizer implementing [`Surface`] over an RGBA pixel buffer

use crate::surface::{Paint, Path, Rgba, Stroke, Surface};
use image::RgbaImage;

/// An `image`-backed surface: renders weather scenes into an
/// [`RgbaImage`] that can be inspected or encoded to PNG.
pub struct PixmapSurface {
    image: RgbaImage,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    /// Borrow the backing pixel buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the backing pixel buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Blend `color` onto the pixel at `(x, y)` with src-over compositing,
    /// scaled by `coverage` (edge anti-aliasing factor).
    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let a = (color.a * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        let inv = 1.0 - a;
        let da = px.0[3] as f32 / 255.0;
        let out_a = a + da * inv;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for c in 0..3 {
            px.0[c] = (src[c] * a + px.0[c] as f32 * inv).round() as u8;
        }
        px.0[3] = (out_a * 255.0).round() as u8;
    }
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width.max(1), height.max(1));
    }

    fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            px.0 = [0, 0, 0, 0];
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x0 = x.floor().max(0.0) as i64;
        let y0 = y.floor().max(0.0) as i64;
        let x1 = ((x + w).ceil() as i64).min(self.image.width() as i64);
        let y1 = ((y + h).ceil() as i64).min(self.image.height() as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                let color = paint.color_at(px as f32 + 0.5, py as f32 + 0.5);
                self.blend(px, py, color, 1.0);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint) {
        self.fill_ellipse(cx, cy, r, r, paint);
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, paint: &Paint) {
        let rx = rx.abs();
        let ry = ry.abs();
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let x0 = (cx - rx - 1.0).floor() as i64;
        let y0 = (cy - ry - 1.0).floor() as i64;
        let x1 = (cx + rx + 1.0).ceil() as i64;
        let y1 = (cy + ry + 1.0).ceil() as i64;
        let min_axis = rx.min(ry);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let fx = px as f32 + 0.5;
                let fy = py as f32 + 0.5;
                // normalized radial distance, rescaled to pixels on the
                // minor axis so the soft edge stays ~1px wide
                let nd = (((fx - cx) / rx).powi(2) + ((fy - cy) / ry).powi(2)).sqrt();
                let coverage = ((1.0 - nd) * min_axis + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let color = paint.color_at(fx, fy);
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let polys = path.polygons();
        if polys.is_empty() {
            return;
        }
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for poly in polys {
            for p in poly {
                min_y = min_y.min(p[1]);
                max_y = max_y.max(p[1]);
            }
        }
        if min_y > max_y {
            return;
        }
        let y0 = min_y.floor().max(0.0) as i64;
        let y1 = (max_y.ceil() as i64).min(self.image.height() as i64 - 1);

        // even-odd scanline fill over all subpaths
        let mut crossings: Vec<f32> = Vec::new();
        for py in y0..=y1 {
            let scan = py as f32 + 0.5;
            crossings.clear();
            for poly in polys {
                if poly.len() < 2 {
                    continue;
                }
                for i in 0..poly.len() {
                    let a = poly[i];
                    let b = poly[(i + 1) % poly.len()];
                    let (ya, yb) = (a[1], b[1]);
                    if (ya <= scan && yb > scan) || (yb <= scan && ya > scan) {
                        let t = (scan - ya) / (yb - ya);
                        crossings.push(a[0] + t * (b[0] - a[0]));
                    }
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                let xa = pair[0].round().max(0.0) as i64;
                let xb = (pair[1].round() as i64).min(self.image.width() as i64);
                for px in xa..xb {
                    let color = paint.color_at(px as f32 + 0.5, scan);
                    self.blend(px, py, color, 1.0);
                }
            }
        }
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke) {
        let hw = (stroke.width * 0.5).max(0.1);
        let x0 = (x1.min(x2) - hw - 1.0).floor() as i64;
        let y0 = (y1.min(y2) - hw - 1.0).floor() as i64;
        let xe = (x1.max(x2) + hw + 1.0).ceil() as i64;
        let ye = (y1.max(y2) + hw + 1.0).ceil() as i64;
        let dx = x2 - x1;
        let dy = y2 - y1;
        let len_sq = dx * dx + dy * dy;
        for py in y0..=ye {
            for px in x0..=xe {
                let fx = px as f32 + 0.5;
                let fy = py as f32 + 0.5;
                // distance to the segment, giving round caps for free
                let t = if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    (((fx - x1) * dx + (fy - y1) * dy) / len_sq).clamp(0.0, 1.0)
                };
                let nx = x1 + t * dx;
                let ny = y1 + t * dy;
                let d = ((fx - nx).powi(2) + (fy - ny).powi(2)).sqrt();
                let coverage = (hw - d + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let color = stroke.paint.color_at(fx, fy);
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }
}

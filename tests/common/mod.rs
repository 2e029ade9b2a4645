//! Recording surface shared by the integration tests

use weatherscape::{Paint, Path, Stroke, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    FillCircle { cx: f32, cy: f32, r: f32 },
    FillEllipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    FillPath { subpaths: usize },
    StrokeLine { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Logs every draw call instead of rasterizing, so tests can assert on
/// what was drawn and in what order.
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn rect_fills(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { x, y, w, h } => Some((*x, *y, *w, *h)),
            _ => None,
        })
    }

    pub fn circle_fills(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillCircle { cx, cy, r } => Some((*cx, *cy, *r)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _paint: &Paint) {
        self.ops.push(DrawOp::FillRect { x, y, w, h });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, _paint: &Paint) {
        self.ops.push(DrawOp::FillCircle { cx, cy, r });
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, _paint: &Paint) {
        self.ops.push(DrawOp::FillEllipse { cx, cy, rx, ry });
    }

    fn fill_path(&mut self, path: &Path, _paint: &Paint) {
        self.ops.push(DrawOp::FillPath {
            subpaths: path.polygons().len(),
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeLine { x1, y1, x2, y2 });
    }
}

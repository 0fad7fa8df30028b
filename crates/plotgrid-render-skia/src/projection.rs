// File: crates/plotgrid-render-skia/src/projection.rs
// Summary: Pixel math: plot rectangle and unit-cube to pixel projection (planar or oblique).

/// Fraction of the plot rectangle given to the depth (y) axis in 3D.
pub const DEPTH: f32 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn min_side(&self) -> f32 { self.width().min(self.height()) }
}

/// Maps normalized coordinates (each axis in `[0, 1]`) to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// x right, y up.
    Planar(PlotRect),
    /// x right, z up, y receding up-right.
    Oblique(PlotRect),
}

impl Projection {
    pub fn new(rect: PlotRect, dimension: usize) -> Self {
        if dimension == 3 { Projection::Oblique(rect) } else { Projection::Planar(rect) }
    }

    pub fn rect(&self) -> PlotRect {
        match *self {
            Projection::Planar(r) | Projection::Oblique(r) => r,
        }
    }

    pub fn project(&self, nx: f64, ny: f64, nz: f64) -> (f32, f32) {
        match *self {
            Projection::Planar(r) => (
                r.left + nx as f32 * r.width(),
                r.bottom - ny as f32 * r.height(),
            ),
            Projection::Oblique(r) => {
                let (fw, fh) = (r.width() * (1.0 - DEPTH), r.height() * (1.0 - DEPTH));
                let (dx, dy) = (r.width() * DEPTH, r.height() * DEPTH);
                (
                    r.left + nx as f32 * fw + ny as f32 * dx,
                    r.bottom - nz as f32 * fh - ny as f32 * dy,
                )
            }
        }
    }

    /// Unit direction (pixels) in which ticks of axis `index` point.
    pub fn tick_direction(&self, index: usize) -> (f32, f32) {
        match (self, index) {
            (_, 0) => (0.0, 1.0),
            (Projection::Planar(_), _) => (-1.0, 0.0),
            (Projection::Oblique(_), 1) => (1.0, 0.0),
            (Projection::Oblique(_), _) => (-1.0, 0.0),
        }
    }

    /// Unit-space point of axis `index` at position `t`, others at 0.
    pub fn axis_point(&self, index: usize, t: f64) -> (f32, f32) {
        match index {
            0 => self.project(t, 0.0, 0.0),
            1 => self.project(0.0, t, 0.0),
            _ => self.project(0.0, 0.0, t),
        }
    }
}

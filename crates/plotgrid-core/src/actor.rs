// File: crates/plotgrid-core/src/actor.rs
// Summary: Drawable data series (scatter, line, surface) and their passive draw descriptors.
// Notes:
// - Constructors validate array lengths/shapes; after that an actor is read-only.
// - `describe` borrows the actor's arrays instead of copying them.

use std::borrow::Cow;

use crate::error::ShapeError;
use crate::types::Rgba;

/// Colormap used by surfaces when none is given.
pub const DEFAULT_COLORMAP: &str = "viridis";

/// Validated 1D coordinate arrays; `z` is present for 3D series.
#[derive(Clone, Debug, PartialEq)]
pub struct Points {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Option<Vec<f64>>,
}

impl Points {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Option<Vec<f64>>) -> Result<Self, ShapeError> {
        if y.len() != x.len() {
            return Err(ShapeError::LengthMismatch { expected_field: "x", expected: x.len(), field: "y", actual: y.len() });
        }
        if let Some(z) = &z {
            if z.len() != x.len() {
                return Err(ShapeError::LengthMismatch { expected_field: "x", expected: x.len(), field: "z", actual: z.len() });
            }
        }
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn z(&self) -> Option<&[f64]> { self.z.as_deref() }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// 3 when `z` is present, else 2.
    pub fn dims(&self) -> usize {
        if self.z.is_some() { 3 } else { 2 }
    }

    fn coords(&self) -> Coords<'_> {
        match &self.z {
            None => Coords::Planar { x: Cow::Borrowed(&self.x), y: Cow::Borrowed(&self.y) },
            Some(z) => Coords::Spatial {
                x: Cow::Borrowed(&self.x),
                y: Cow::Borrowed(&self.y),
                z: Cow::Borrowed(z),
            },
        }
    }
}

/// Structured mesh: three row-major 2D arrays of identical shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    z: Vec<Vec<f64>>,
}

fn shape_of(field: &'static str, rows: &[Vec<f64>]) -> Result<(usize, usize), ShapeError> {
    let cols = rows.first().map_or(0, Vec::len);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != cols {
            return Err(ShapeError::RaggedMesh { field, row, expected: cols, actual: values.len() });
        }
    }
    Ok((rows.len(), cols))
}

impl Mesh {
    pub fn new(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>, z: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let expected = shape_of("x", &x)?;
        for (field, rows) in [("y", &y), ("z", &z)] {
            let actual = shape_of(field, rows)?;
            if actual != expected {
                return Err(ShapeError::MeshShape { expected_field: "x", expected, field, actual });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Build a mesh over the cartesian product of `xs` and `ys`, with `z = f(x, y)`.
    ///
    /// Rows follow `ys`, columns follow `xs`.
    pub fn meshgrid(xs: &[f64], ys: &[f64], f: impl Fn(f64, f64) -> f64) -> Self {
        let x = ys.iter().map(|_| xs.to_vec()).collect();
        let y = ys.iter().map(|&yv| vec![yv; xs.len()]).collect();
        let z = ys.iter().map(|&yv| xs.iter().map(|&xv| f(xv, yv)).collect()).collect();
        Self { x, y, z }
    }

    pub fn x(&self) -> &[Vec<f64>] { &self.x }
    pub fn y(&self) -> &[Vec<f64>] { &self.y }
    pub fn z(&self) -> &[Vec<f64>] { &self.z }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.x.first().map_or(0, Vec::len))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scatter {
    points: Points,
    color: Rgba,
    size: f32,
    label: Option<String>,
}

impl Scatter {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ShapeError> {
        Ok(Self::from_points(Points::new(x, y, None)?))
    }

    pub fn new_3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, ShapeError> {
        Ok(Self::from_points(Points::new(x, y, Some(z))?))
    }

    pub fn from_points(points: Points) -> Self {
        Self { points, color: Rgba::BLACK, size: 1.0, label: None }
    }

    pub fn with_color(mut self, color: Rgba) -> Self { self.color = color; self }
    pub fn with_size(mut self, size: f32) -> Self { self.size = size; self }
    pub fn with_label(mut self, label: impl Into<String>) -> Self { self.label = Some(label.into()); self }

    pub fn points(&self) -> &Points { &self.points }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    points: Points,
    color: Rgba,
    width: f32,
    label: Option<String>,
}

impl Line {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ShapeError> {
        Ok(Self::from_points(Points::new(x, y, None)?))
    }

    pub fn new_3d(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, ShapeError> {
        Ok(Self::from_points(Points::new(x, y, Some(z))?))
    }

    pub fn from_points(points: Points) -> Self {
        Self { points, color: Rgba::BLACK, width: 1.0, label: None }
    }

    pub fn with_color(mut self, color: Rgba) -> Self { self.color = color; self }
    pub fn with_width(mut self, width: f32) -> Self { self.width = width; self }
    pub fn with_label(mut self, label: impl Into<String>) -> Self { self.label = Some(label.into()); self }

    pub fn points(&self) -> &Points { &self.points }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    mesh: Mesh,
    colormap: String,
    label: Option<String>,
}

impl Surface {
    pub fn new(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>, z: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        Ok(Self::from_mesh(Mesh::new(x, y, z)?))
    }

    pub fn from_mesh(mesh: Mesh) -> Self {
        Self { mesh, colormap: DEFAULT_COLORMAP.to_string(), label: None }
    }

    pub fn with_colormap(mut self, name: impl Into<String>) -> Self { self.colormap = name.into(); self }
    pub fn with_label(mut self, label: impl Into<String>) -> Self { self.label = Some(label.into()); self }

    pub fn mesh(&self) -> &Mesh { &self.mesh }
    pub fn colormap(&self) -> &str { &self.colormap }
}

/// A drawable series.
#[derive(Clone, Debug, PartialEq)]
pub enum Actor {
    Scatter(Scatter),
    Line(Line),
    Surface(Surface),
}

impl From<Scatter> for Actor {
    fn from(value: Scatter) -> Self { Actor::Scatter(value) }
}

impl From<Line> for Actor {
    fn from(value: Line) -> Self { Actor::Line(value) }
}

impl From<Surface> for Actor {
    fn from(value: Surface) -> Self { Actor::Surface(value) }
}

impl Actor {
    pub fn label(&self) -> Option<&str> {
        match self {
            Actor::Scatter(s) => s.label.as_deref(),
            Actor::Line(l) => l.label.as_deref(),
            Actor::Surface(s) => s.label.as_deref(),
        }
    }

    /// Coordinate dimensionality: surfaces are always 3D.
    pub fn dims(&self) -> usize {
        match self {
            Actor::Scatter(s) => s.points.dims(),
            Actor::Line(l) => l.points.dims(),
            Actor::Surface(_) => 3,
        }
    }

    pub fn style(&self) -> ColorStyle {
        match self {
            Actor::Scatter(s) => ColorStyle::Solid(s.color),
            Actor::Line(l) => ColorStyle::Solid(l.color),
            Actor::Surface(s) => ColorStyle::Colormap(s.colormap.clone()),
        }
    }

    /// Marker size for scatters, stroke width for lines, 1.0 for surfaces.
    pub fn weight(&self) -> f32 {
        match self {
            Actor::Scatter(s) => s.size,
            Actor::Line(l) => l.width,
            Actor::Surface(_) => 1.0,
        }
    }

    pub fn marker(&self) -> MarkerKind {
        match self {
            Actor::Scatter(_) => MarkerKind::Point,
            Actor::Line(_) | Actor::Surface(_) => MarkerKind::Line,
        }
    }

    /// Passive descriptor borrowing this actor's data.
    pub fn describe(&self) -> DrawDescriptor<'_> {
        let (kind, coords) = match self {
            Actor::Scatter(s) => (DrawKind::Point, s.points.coords()),
            Actor::Line(l) => (DrawKind::Polyline, l.points.coords()),
            Actor::Surface(s) => (DrawKind::Mesh, Coords::Mesh(Cow::Borrowed(&s.mesh))),
        };
        DrawDescriptor {
            kind,
            coords,
            style: self.style(),
            weight: self.weight(),
            label: self.label().map(Cow::Borrowed),
        }
    }
}

/// Fill/stroke style: a solid color or a named colormap.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorStyle {
    Solid(Rgba),
    Colormap(String),
}

/// Legend glyph kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Point,
    Line,
}

impl MarkerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Point => "point",
            MarkerKind::Line => "line",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Point,
    Polyline,
    Mesh,
    /// Disjoint segments between consecutive coordinate pairs (0-1, 2-3, ...).
    Segments,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Coords<'a> {
    Planar { x: Cow<'a, [f64]>, y: Cow<'a, [f64]> },
    Spatial { x: Cow<'a, [f64]>, y: Cow<'a, [f64]>, z: Cow<'a, [f64]> },
    Mesh(Cow<'a, Mesh>),
}

impl Coords<'_> {
    /// Number of points, or mesh vertices.
    pub fn len(&self) -> usize {
        match self {
            Coords::Planar { x, .. } | Coords::Spatial { x, .. } => x.len(),
            Coords::Mesh(m) => {
                let (r, c) = m.shape();
                r * c
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_owned(self) -> Coords<'static> {
        match self {
            Coords::Planar { x, y } => Coords::Planar { x: Cow::Owned(x.into_owned()), y: Cow::Owned(y.into_owned()) },
            Coords::Spatial { x, y, z } => Coords::Spatial {
                x: Cow::Owned(x.into_owned()),
                y: Cow::Owned(y.into_owned()),
                z: Cow::Owned(z.into_owned()),
            },
            Coords::Mesh(m) => Coords::Mesh(Cow::Owned(m.into_owned())),
        }
    }
}

/// What to draw, independent of any backend.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawDescriptor<'a> {
    pub kind: DrawKind,
    pub coords: Coords<'a>,
    pub style: ColorStyle,
    /// Marker size or stroke width.
    pub weight: f32,
    pub label: Option<Cow<'a, str>>,
}

impl DrawDescriptor<'_> {
    pub fn into_owned(self) -> DrawDescriptor<'static> {
        DrawDescriptor {
            kind: self.kind,
            coords: self.coords.into_owned(),
            style: self.style,
            weight: self.weight,
            label: self.label.map(|l| Cow::Owned(l.into_owned())),
        }
    }
}

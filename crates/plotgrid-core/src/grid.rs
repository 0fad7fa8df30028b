// File: crates/plotgrid-core/src/grid.rs
// Summary: 2D/3D grid composing axes and actors; tick aggregation, guides and draw ordering.

use std::borrow::Cow;

use anyhow::Result;
use tracing::{debug, trace, warn};

use crate::actor::{Actor, ColorStyle, Coords, DrawDescriptor, DrawKind};
use crate::axis::{Axis, Tick};
use crate::error::DimensionError;
use crate::render::{AxisDrawSpec, Renderer};
use crate::types::Rgba;

/// Shadow and perpendicular guide settings (3D grids only).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    pub show_shadows: bool,
    pub show_perpendiculars: bool,
    pub shadow_color: Rgba,
    pub perpendicular_color: Rgba,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            show_shadows: false,
            show_perpendiculars: false,
            shadow_color: Rgba::GRAY,
            perpendicular_color: Rgba::GRAY,
        }
    }
}

/// How an accepted actor sits in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorPlacement {
    /// Actor dimensionality matches the grid.
    Native,
    /// 2D actor in a 3D grid, drawn in the z = 0 plane.
    ZPlane,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    axes: Vec<Axis>,
    actors: Vec<Actor>,
    z_plane: Vec<usize>,
    options: GridOptions,
}

impl Grid {
    pub fn planar(x: Axis, y: Axis) -> Self {
        Self::with_axes(vec![x, y])
    }

    pub fn spatial(x: Axis, y: Axis, z: Axis) -> Self {
        Self::with_axes(vec![x, y, z])
    }

    pub fn from_axes(axes: Vec<Axis>) -> Result<Self, DimensionError> {
        match axes.len() {
            2 | 3 => Ok(Self::with_axes(axes)),
            count => Err(DimensionError::AxisCount { count }),
        }
    }

    fn with_axes(axes: Vec<Axis>) -> Self {
        Self { axes, actors: Vec::new(), z_plane: Vec::new(), options: GridOptions::default() }
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn axes(&self) -> &[Axis] { &self.axes }
    pub fn actors(&self) -> &[Actor] { &self.actors }
    pub fn options(&self) -> &GridOptions { &self.options }

    /// 2 or 3.
    pub fn dims(&self) -> usize {
        self.axes.len()
    }

    /// Indices of 2D actors embedded at z = 0 in a 3D grid.
    pub fn z_plane_actors(&self) -> &[usize] {
        &self.z_plane
    }

    /// Append an actor. A 3D actor needs a 3-axis grid; a 2D actor in a 3D grid
    /// is accepted and reported as [`ActorPlacement::ZPlane`].
    pub fn add_actor(&mut self, actor: impl Into<Actor>) -> Result<ActorPlacement, DimensionError> {
        let actor = actor.into();
        let actor_dims = actor.dims();
        let grid_axes = self.dims();
        let placement = match (actor_dims, grid_axes) {
            (3, 2) => return Err(DimensionError::ActorNeedsDepth { actor_dims, grid_axes }),
            (2, 3) => {
                warn!(index = self.actors.len(), label = actor.label(), "2D actor placed in z=0 plane of 3D grid");
                self.z_plane.push(self.actors.len());
                ActorPlacement::ZPlane
            }
            _ => ActorPlacement::Native,
        };
        debug!(index = self.actors.len(), dims = actor_dims, ?placement, "add actor");
        self.actors.push(actor);
        Ok(placement)
    }

    /// One tick list per axis, in axis order.
    pub fn ticks(&self) -> Vec<Vec<Tick>> {
        self.axes.iter().map(Axis::ticks).collect()
    }

    /// Shadow and perpendicular descriptors for 3D scatter/line actors.
    ///
    /// The floor plane is the z axis's domain start.
    pub fn guides(&self) -> Vec<DrawDescriptor<'static>> {
        let opts = &self.options;
        if self.dims() != 3 || !(opts.show_shadows || opts.show_perpendiculars) {
            return Vec::new();
        }
        let floor = self.axes[2].range().start();
        let mut out = Vec::new();
        for actor in &self.actors {
            let (kind, points) = match actor {
                Actor::Scatter(s) => (DrawKind::Point, s.points()),
                Actor::Line(l) => (DrawKind::Polyline, l.points()),
                Actor::Surface(_) => continue,
            };
            let Some(z) = points.z() else { continue };
            let n = points.len();
            if opts.show_shadows {
                out.push(DrawDescriptor {
                    kind,
                    coords: Coords::Spatial {
                        x: Cow::Owned(points.x().to_vec()),
                        y: Cow::Owned(points.y().to_vec()),
                        z: Cow::Owned(vec![floor; n]),
                    },
                    style: ColorStyle::Solid(opts.shadow_color),
                    weight: actor.weight(),
                    label: None,
                });
            }
            if opts.show_perpendiculars {
                let doubled = |v: &[f64]| v.iter().flat_map(|&a| [a, a]).collect::<Vec<_>>();
                let drop_z: Vec<f64> = z.iter().flat_map(|&a| [a, floor]).collect();
                out.push(DrawDescriptor {
                    kind: DrawKind::Segments,
                    coords: Coords::Spatial {
                        x: Cow::Owned(doubled(points.x())),
                        y: Cow::Owned(doubled(points.y())),
                        z: Cow::Owned(drop_z),
                    },
                    style: ColorStyle::Solid(opts.perpendicular_color),
                    weight: 1.0,
                    label: None,
                });
            }
        }
        out
    }

    /// Draw axes, then guides, then actors in insertion order.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let dimension = self.dims();
        for (index, axis) in self.axes.iter().enumerate() {
            let spec = AxisDrawSpec {
                index,
                dimension,
                ticks: axis.ticks(),
                style: axis.style(),
                extent: axis.extent(),
                range: axis.range(),
            };
            trace!(index, kind = axis.kind().name(), "draw axis");
            renderer.draw_axis(&spec)?;
        }
        for guide in self.guides() {
            trace!(kind = ?guide.kind, "draw guide");
            renderer.draw_actor(&guide)?;
        }
        for (index, actor) in self.actors.iter().enumerate() {
            trace!(index, label = actor.label(), "draw actor");
            renderer.draw_actor(&actor.describe())?;
        }
        Ok(())
    }
}

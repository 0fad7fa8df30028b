// File: crates/plotgrid-core/src/lib.rs
// Summary: Core library entry point; exports ranges, axes, actors, grids, legends and the renderer contract.

pub mod actor;
pub mod axis;
pub mod error;
pub mod grid;
pub mod legend;
pub mod range;
pub mod render;
pub mod scene;
pub mod types;

pub use actor::{Actor, ColorStyle, Coords, DrawDescriptor, DrawKind, Line, MarkerKind, Mesh, Points, Scatter, Surface};
pub use axis::{Axis, AxisStyle, Tick};
pub use error::{DimensionError, DomainError, Error, Result, ShapeError};
pub use grid::{ActorPlacement, Grid, GridOptions};
pub use legend::{Legend, LegendEntry, LegendLocation};
pub use range::{linspace, DomainSamples, Range, RangeKind, Transformed, TransformedSamples};
pub use render::{AxisDrawSpec, AxisFrame, DrawCall, Recorder, RecordedAxis, Renderer};
pub use scene::Scene;
pub use types::Rgba;

// File: crates/plotgrid-core/src/render.rs
// Summary: Renderer contract (axes, actors, legend, present) and an in-memory recorder.

use anyhow::Result;

use crate::actor::DrawDescriptor;
use crate::axis::{AxisStyle, Tick};
use crate::legend::{LegendEntry, LegendLocation};
use crate::range::Range;

/// Everything a backend needs to draw one axis.
#[derive(Clone, Debug)]
pub struct AxisDrawSpec<'a> {
    /// Axis order within the grid: 0 = x, 1 = y, 2 = z.
    pub index: usize,
    /// 2 or 3, the grid's dimensionality.
    pub dimension: usize,
    pub ticks: Vec<Tick>,
    pub style: &'a AxisStyle,
    /// Transformed positions of the domain bounds along this axis.
    pub extent: (f64, f64),
    /// Source range, for mapping actor data into this axis's space.
    pub range: &'a Range,
}

impl AxisDrawSpec<'_> {
    /// Owned mapping from data values to this axis's unit interval.
    pub fn frame(&self) -> AxisFrame {
        AxisFrame { range: self.range.clone(), extent: self.extent }
    }

    pub fn normalize(&self, value: f64) -> f64 {
        normalize_on(self.range, self.extent, value)
    }
}

/// Maps data values through a range transform into `[0, 1]` over the axis extent.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisFrame {
    pub range: Range,
    pub extent: (f64, f64),
}

impl AxisFrame {
    /// Values outside the domain land outside `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        normalize_on(&self.range, self.extent, value)
    }

    /// Same as [`AxisFrame::normalize`] for a position already in transformed space.
    pub fn normalize_transformed(&self, position: f64) -> f64 {
        unit(self.extent, position)
    }
}

fn normalize_on(range: &Range, extent: (f64, f64), value: f64) -> f64 {
    unit(extent, range.transform(value).along_axis())
}

fn unit((lo, hi): (f64, f64), position: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    (position - lo) / span
}

/// Plotting backend. Calls arrive as axes, then actors, then the legend, then `present`.
pub trait Renderer {
    fn draw_axis(&mut self, axis: &AxisDrawSpec<'_>) -> Result<()>;
    fn draw_actor(&mut self, descriptor: &DrawDescriptor<'_>) -> Result<()>;
    fn draw_legend(&mut self, entries: &[LegendEntry], location: LegendLocation) -> Result<()>;
    /// Flush the assembled scene.
    fn present(&mut self) -> Result<()>;
}

/// Owned copy of an [`AxisDrawSpec`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedAxis {
    pub index: usize,
    pub dimension: usize,
    pub ticks: Vec<Tick>,
    pub style: AxisStyle,
    pub extent: (f64, f64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Axis(RecordedAxis),
    Actor(DrawDescriptor<'static>),
    Legend { entries: Vec<LegendEntry>, location: LegendLocation },
    Present,
}

/// Renderer that keeps every call in order, for tests and scene dumps.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axes(&self) -> impl Iterator<Item = &RecordedAxis> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Axis(a) => Some(a),
            _ => None,
        })
    }

    pub fn actors(&self) -> impl Iterator<Item = &DrawDescriptor<'static>> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Actor(d) => Some(d),
            _ => None,
        })
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Present)).count()
    }
}

impl Renderer for Recorder {
    fn draw_axis(&mut self, axis: &AxisDrawSpec<'_>) -> Result<()> {
        self.calls.push(DrawCall::Axis(RecordedAxis {
            index: axis.index,
            dimension: axis.dimension,
            ticks: axis.ticks.clone(),
            style: axis.style.clone(),
            extent: axis.extent,
        }));
        Ok(())
    }

    fn draw_actor(&mut self, descriptor: &DrawDescriptor<'_>) -> Result<()> {
        self.calls.push(DrawCall::Actor(descriptor.clone().into_owned()));
        Ok(())
    }

    fn draw_legend(&mut self, entries: &[LegendEntry], location: LegendLocation) -> Result<()> {
        self.calls.push(DrawCall::Legend { entries: entries.to_vec(), location });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    #[test]
    fn normalize_follows_axis_transform() {
        let axis = Axis::log(1.0, 100.0, 10.0).unwrap();
        let spec = AxisDrawSpec {
            index: 0,
            dimension: 2,
            ticks: axis.ticks(),
            style: axis.style(),
            extent: axis.extent(),
            range: axis.range(),
        };
        assert_eq!(spec.normalize(1.0), 0.0);
        assert_eq!(spec.normalize(10.0), 0.5);
        assert_eq!(spec.normalize(100.0), 1.0);
        assert_eq!(spec.frame().normalize_transformed(1.0), 0.5);
    }

    #[test]
    fn normalize_handles_reversed_extent() {
        let axis = Axis::hyperbolic(1.0, 4.0).unwrap();
        let spec = AxisDrawSpec {
            index: 1,
            dimension: 2,
            ticks: Vec::new(),
            style: axis.style(),
            extent: axis.extent(),
            range: axis.range(),
        };
        assert_eq!(spec.normalize(1.0), 0.0);
        assert_eq!(spec.normalize(4.0), 1.0);
    }
}

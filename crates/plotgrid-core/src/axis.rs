// File: crates/plotgrid-core/src/axis.rs
// Summary: Axis model wrapping a Range with presentation metadata and tick derivation.

use crate::error::DomainError;
use crate::range::{linspace, Range, RangeKind, Transformed, DEFAULT_SAMPLE_COUNT};
use crate::types::{Rgba, DEFAULT_LABEL_OFFSET, DEFAULT_TICK_LENGTH, DEFAULT_TICK_WIDTH, TICK_COUNT};

/// Appearance of an axis line, its ticks and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    pub color: Rgba,
    pub line_width: f32,
    pub tick_length: f32,
    pub tick_width: f32,
    pub label: Option<String>,
    pub label_offset: f32,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            line_width: 1.0,
            tick_length: DEFAULT_TICK_LENGTH,
            tick_width: DEFAULT_TICK_WIDTH,
            label: None,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

/// A labeled reference position on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Display position in transformed space.
    pub position: Transformed,
    /// Domain value formatted with two fractional digits.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    range: Range,
    style: AxisStyle,
}

impl Axis {
    pub fn new(range: Range, style: AxisStyle) -> Self {
        Self { range, style }
    }

    pub fn linear(start: f64, stop: f64) -> Result<Self, DomainError> {
        Ok(Self::from_range(Range::linear(start, stop, DEFAULT_SAMPLE_COUNT)?))
    }

    pub fn log(start: f64, stop: f64, base: f64) -> Result<Self, DomainError> {
        Ok(Self::from_range(Range::log(start, stop, DEFAULT_SAMPLE_COUNT, base)?))
    }

    pub fn polar(start: f64, stop: f64) -> Result<Self, DomainError> {
        Ok(Self::from_range(Range::polar(start, stop, DEFAULT_SAMPLE_COUNT)?))
    }

    pub fn hyperbolic(start: f64, stop: f64) -> Result<Self, DomainError> {
        Ok(Self::from_range(Range::hyperbolic(start, stop, DEFAULT_SAMPLE_COUNT)?))
    }

    pub fn from_range(range: Range) -> Self {
        Self::new(range, AxisStyle::default())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.style.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.style.line_width = width;
        self
    }

    /// Tick length as a fraction of the plot's shorter side.
    pub fn with_tick_length(mut self, length: f32) -> Self {
        self.style.tick_length = length;
        self
    }

    pub fn with_tick_width(mut self, width: f32) -> Self {
        self.style.tick_width = width;
        self
    }

    pub fn with_label_offset(mut self, offset: f32) -> Self {
        self.style.label_offset = offset;
        self
    }

    pub fn range(&self) -> &Range { &self.range }
    pub fn style(&self) -> &AxisStyle { &self.style }
    pub fn kind(&self) -> RangeKind { self.range.kind() }
    pub fn label(&self) -> Option<&str> { self.style.label.as_deref() }

    /// Five ticks from evenly sampling the domain, positioned through the range transform.
    ///
    /// Independent of the range's sample count.
    pub fn ticks(&self) -> Vec<Tick> {
        linspace(self.range.start(), self.range.stop(), TICK_COUNT)
            .into_iter()
            .map(|v| Tick { position: self.range.transform(v), label: format!("{v:.2}") })
            .collect()
    }

    /// Transformed positions of the domain bounds, projected onto the axis.
    ///
    /// For Hyperbolic ranges the first value is larger than the second.
    pub fn extent(&self) -> (f64, f64) {
        (
            self.range.transform(self.range.start()).along_axis(),
            self.range.transform(self.range.stop()).along_axis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_style_constants() {
        let s = AxisStyle::default();
        assert_eq!(s.color, Rgba::BLACK);
        assert_eq!(s.tick_length, 0.02);
        assert_eq!(s.tick_width, 0.005);
        assert_eq!(s.label_offset, 0.1);
        assert!(s.label.is_none());
    }

    #[test]
    fn builders_set_every_style_field() {
        let axis = Axis::linear(0.0, 1.0)
            .unwrap()
            .with_label("t")
            .with_color(Rgba::RED)
            .with_line_width(2.0)
            .with_tick_length(0.05)
            .with_tick_width(0.01)
            .with_label_offset(0.2);
        let s = axis.style();
        assert_eq!(s.label.as_deref(), Some("t"));
        assert_eq!(s.color, Rgba::RED);
        assert_eq!(s.line_width, 2.0);
        assert_eq!(s.tick_length, 0.05);
        assert_eq!(s.tick_width, 0.01);
        assert_eq!(s.label_offset, 0.2);
    }

    #[test]
    fn linear_ticks_have_two_decimals() {
        let axis = Axis::linear(0.0, 10.0).unwrap();
        let labels: Vec<_> = axis.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["0.00", "2.50", "5.00", "7.50", "10.00"]);
    }

    #[test]
    fn log_ticks_sample_domain_linearly() {
        let axis = Axis::new(Range::log(1.0, 10_001.0, 3, 10.0).unwrap(), AxisStyle::default());
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, "1.00");
        assert_eq!(ticks[2].label, "5001.00");
        assert_eq!(ticks[0].position, Transformed::Scalar(0.0));
        assert_eq!(ticks[2].position, Transformed::Scalar(5001f64.log10()));
    }

    #[test]
    fn hyperbolic_extent_is_reversed() {
        let axis = Axis::hyperbolic(1.0, 4.0).unwrap();
        assert_eq!(axis.extent(), (1.0, 0.25));
    }

    #[test]
    fn polar_ticks_project_radius() {
        let axis = Axis::polar(0.0, 2.0).unwrap().with_label("r");
        let ticks = axis.ticks();
        assert_eq!(ticks[4].position, Transformed::Planar(2.0, 0.0));
        assert_eq!(axis.label(), Some("r"));
    }
}

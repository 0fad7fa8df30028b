// File: crates/plotgrid-core/src/range.rs
// Summary: Numeric domains with linear, log, polar and hyperbolic transforms.
// Notes:
// - A Range is immutable; domain and transformed samples are computed once in `new`.
// - Polar treats start/stop as radius bounds and always sweeps the angle over [0, 2π).

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::DomainError;

/// Sample count used by the convenience axis constructors.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Transform applied to a range's domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeKind {
    /// Identity.
    Linear,
    /// `log_base(x)`, geometric sampling.
    Log { base: f64 },
    /// Radius sweep projected to Cartesian `(r·cos θ, r·sin θ)`.
    Polar,
    /// Reciprocal `1/x`.
    Hyperbolic,
}

impl RangeKind {
    pub const fn log10() -> Self {
        RangeKind::Log { base: 10.0 }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            RangeKind::Linear => "linear",
            RangeKind::Log { .. } => "log",
            RangeKind::Polar => "polar",
            RangeKind::Hyperbolic => "hyperbolic",
        }
    }
}

/// A transformed coordinate: scalar for Linear/Log/Hyperbolic, planar for Polar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transformed {
    Scalar(f64),
    Planar(f64, f64),
}

impl Transformed {
    /// Position along a single axis: the scalar, or the x component of a planar value.
    #[inline]
    pub fn along_axis(&self) -> f64 {
        match *self {
            Transformed::Scalar(v) => v,
            Transformed::Planar(x, _) => x,
        }
    }
}

/// Domain samples of a range.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainSamples {
    Scalar(Vec<f64>),
    /// Angle and radius sweeps, index-aligned.
    Polar { theta: Vec<f64>, r: Vec<f64> },
}

impl DomainSamples {
    pub fn len(&self) -> usize {
        match self {
            DomainSamples::Scalar(v) => v.len(),
            DomainSamples::Polar { r, .. } => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_scalar(&self) -> Option<&[f64]> {
        match self {
            DomainSamples::Scalar(v) => Some(v),
            DomainSamples::Polar { .. } => None,
        }
    }
}

/// Transformed samples of a range, index-aligned with [`DomainSamples`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransformedSamples {
    Scalar(Vec<f64>),
    Planar(Vec<(f64, f64)>),
}

impl TransformedSamples {
    pub fn len(&self) -> usize {
        match self {
            TransformedSamples::Scalar(v) => v.len(),
            TransformedSamples::Planar(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_scalar(&self) -> Option<&[f64]> {
        match self {
            TransformedSamples::Scalar(v) => Some(v),
            TransformedSamples::Planar(_) => None,
        }
    }

    pub fn as_planar(&self) -> Option<&[(f64, f64)]> {
        match self {
            TransformedSamples::Planar(v) => Some(v),
            TransformedSamples::Scalar(_) => None,
        }
    }
}

/// `count` evenly spaced values from `start` to `stop` inclusive; both endpoints are exact.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // `stop - start` can overflow even when both bounds are finite
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i + 1 == count {
                        stop
                    } else {
                        let t = i as f64 / last;
                        start * (1.0 - t) + stop * t
                    }
                })
                .collect()
        }
    }
}

#[inline]
fn log_in(base: f64, v: f64) -> f64 {
    if base == 10.0 {
        v.log10()
    } else if base == 2.0 {
        v.log2()
    } else if base == std::f64::consts::E {
        v.ln()
    } else {
        v.ln() / base.ln()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    start: f64,
    stop: f64,
    sample_count: usize,
    kind: RangeKind,
    domain: DomainSamples,
    transformed: TransformedSamples,
}

impl Range {
    /// Build a range and eagerly compute its samples.
    pub fn new(start: f64, stop: f64, sample_count: usize, kind: RangeKind) -> Result<Self, DomainError> {
        validate(start, stop, sample_count, kind)?;
        debug!(kind = kind.name(), start, stop, sample_count, "range");

        let (domain, transformed) = match kind {
            RangeKind::Linear => {
                let d = linspace(start, stop, sample_count);
                let t = d.clone();
                (DomainSamples::Scalar(d), TransformedSamples::Scalar(t))
            }
            RangeKind::Log { base } => {
                let mut d: Vec<f64> = linspace(log_in(base, start), log_in(base, stop), sample_count)
                    .into_iter()
                    .map(|e| base.powf(e))
                    .collect();
                // pin endpoints so the domain reports exactly what was asked for
                if let Some(first) = d.first_mut() {
                    *first = start;
                }
                if sample_count > 1 {
                    if let Some(last) = d.last_mut() {
                        *last = stop;
                    }
                }
                let t = d.iter().map(|&v| log_in(base, v)).collect();
                (DomainSamples::Scalar(d), TransformedSamples::Scalar(t))
            }
            RangeKind::Hyperbolic => {
                let d = linspace(start, stop, sample_count);
                let t = d.iter().map(|&v| 1.0 / v).collect();
                (DomainSamples::Scalar(d), TransformedSamples::Scalar(t))
            }
            RangeKind::Polar => {
                let n = sample_count as f64;
                let theta: Vec<f64> = (0..sample_count).map(|i| TAU * i as f64 / n).collect();
                let r = linspace(start, stop, sample_count);
                let t = theta
                    .iter()
                    .zip(&r)
                    .map(|(&th, &r)| (r * th.cos(), r * th.sin()))
                    .collect();
                (DomainSamples::Polar { theta, r }, TransformedSamples::Planar(t))
            }
        };

        Ok(Self { start, stop, sample_count, kind, domain, transformed })
    }

    pub fn linear(start: f64, stop: f64, sample_count: usize) -> Result<Self, DomainError> {
        Self::new(start, stop, sample_count, RangeKind::Linear)
    }

    pub fn log(start: f64, stop: f64, sample_count: usize, base: f64) -> Result<Self, DomainError> {
        Self::new(start, stop, sample_count, RangeKind::Log { base })
    }

    pub fn polar(start: f64, stop: f64, sample_count: usize) -> Result<Self, DomainError> {
        Self::new(start, stop, sample_count, RangeKind::Polar)
    }

    pub fn hyperbolic(start: f64, stop: f64, sample_count: usize) -> Result<Self, DomainError> {
        Self::new(start, stop, sample_count, RangeKind::Hyperbolic)
    }

    pub fn start(&self) -> f64 { self.start }
    pub fn stop(&self) -> f64 { self.stop }
    pub fn sample_count(&self) -> usize { self.sample_count }
    pub fn kind(&self) -> RangeKind { self.kind }
    pub fn domain(&self) -> &DomainSamples { &self.domain }
    pub fn transformed(&self) -> &TransformedSamples { &self.transformed }

    /// Apply this range's elementwise rule to an arbitrary value.
    ///
    /// Values outside the validated domain follow IEEE semantics
    /// (e.g. `log` of a negative value is NaN, `1/0` is infinite).
    /// Polar projects the value as a radius at θ = 0.
    pub fn transform(&self, value: f64) -> Transformed {
        match self.kind {
            RangeKind::Linear => Transformed::Scalar(value),
            RangeKind::Log { base } => Transformed::Scalar(log_in(base, value)),
            RangeKind::Hyperbolic => Transformed::Scalar(1.0 / value),
            RangeKind::Polar => Transformed::Planar(value, 0.0),
        }
    }
}

fn validate(start: f64, stop: f64, sample_count: usize, kind: RangeKind) -> Result<(), DomainError> {
    if sample_count == 0 {
        return Err(DomainError::ZeroSamples);
    }
    if !start.is_finite() {
        return Err(DomainError::NonFinite { field: "start", value: start });
    }
    if !stop.is_finite() {
        return Err(DomainError::NonFinite { field: "stop", value: stop });
    }
    match kind {
        RangeKind::Linear => {
            if start >= stop {
                return Err(DomainError::InvertedBounds { kind: kind.name(), start, stop });
            }
        }
        RangeKind::Log { base } => {
            if !base.is_finite() || base <= 0.0 || base == 1.0 {
                return Err(DomainError::InvalidLogBase { base });
            }
            if start <= 0.0 || stop <= 0.0 {
                return Err(DomainError::NonPositiveLogBound { start, stop });
            }
            if start >= stop {
                return Err(DomainError::InvertedBounds { kind: kind.name(), start, stop });
            }
        }
        RangeKind::Hyperbolic => {
            if start >= stop {
                return Err(DomainError::InvertedBounds { kind: kind.name(), start, stop });
            }
            if start <= 0.0 && stop >= 0.0 {
                return Err(DomainError::ZeroCrossing { start, stop });
            }
        }
        RangeKind::Polar => {
            if start < 0.0 || start > stop {
                return Err(DomainError::NegativeRadius { start, stop });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_pins_endpoints() {
        let v = linspace(0.1, 0.7, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], 0.1);
        assert_eq!(v[6], 0.7);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(3.0, 4.0, 0).is_empty());
    }

    #[test]
    fn linspace_survives_full_f64_span() {
        let v = linspace(-f64::MAX, f64::MAX, 5);
        assert_eq!(v[0], -f64::MAX);
        assert_eq!(v[2], 0.0);
        assert_eq!(v[4], f64::MAX);
        assert!(v.iter().all(|x| x.is_finite()));
        assert!(v.windows(2).all(|w| w[0] < w[1]));

        let r = Range::linear(-f64::MAX, f64::MAX, 5).unwrap();
        assert_eq!(r.domain().as_scalar().unwrap(), &v[..]);
    }

    #[test]
    fn linear_is_identity() {
        let r = Range::linear(0.0, 10.0, 5).unwrap();
        assert_eq!(r.domain().as_scalar().unwrap(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(r.transformed().as_scalar(), r.domain().as_scalar());
        assert_eq!(r.transform(3.25), Transformed::Scalar(3.25));
    }

    #[test]
    fn log_samples_are_geometric() {
        let r = Range::log(1.0, 100.0, 3, 10.0).unwrap();
        assert_eq!(r.domain().as_scalar().unwrap(), &[1.0, 10.0, 100.0]);
        assert_eq!(r.transformed().as_scalar().unwrap(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn log_base_two() {
        let r = Range::log(1.0, 8.0, 4, 2.0).unwrap();
        let t = r.transformed().as_scalar().unwrap();
        for (i, &v) in t.iter().enumerate() {
            assert_relative_eq!(v, i as f64, epsilon = 1e-12);
        }
        assert_relative_eq!(r.transform(16.0).along_axis(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn log_rejects_bad_inputs() {
        assert_eq!(
            Range::log(0.0, 10.0, 3, 10.0).unwrap_err(),
            DomainError::NonPositiveLogBound { start: 0.0, stop: 10.0 }
        );
        assert_eq!(Range::log(1.0, 10.0, 3, 1.0).unwrap_err(), DomainError::InvalidLogBase { base: 1.0 });
        assert!(matches!(Range::log(10.0, 1.0, 3, 10.0), Err(DomainError::InvertedBounds { .. })));
    }

    #[test]
    fn hyperbolic_is_reciprocal_and_refuses_zero() {
        let r = Range::hyperbolic(1.0, 4.0, 4).unwrap();
        assert_eq!(r.transformed().as_scalar().unwrap(), &[1.0, 0.5, 1.0 / 3.0, 0.25]);
        assert_eq!(
            Range::hyperbolic(-1.0, 1.0, 5).unwrap_err(),
            DomainError::ZeroCrossing { start: -1.0, stop: 1.0 }
        );
        assert!(matches!(Range::hyperbolic(0.0, 1.0, 5), Err(DomainError::ZeroCrossing { .. })));
        assert!(Range::hyperbolic(-4.0, -1.0, 4).is_ok());
    }

    #[test]
    fn polar_sweeps_full_circle() {
        let r = Range::polar(1.0, 1.0, 4).unwrap();
        let DomainSamples::Polar { theta, r: radii } = r.domain() else { panic!("polar domain") };
        assert_eq!(theta.len(), 4);
        assert_relative_eq!(theta[1], TAU / 4.0);
        assert!(theta.iter().all(|&t| t < TAU));
        assert!(radii.iter().all(|&v| v == 1.0));
        let pts = r.transformed().as_planar().unwrap();
        assert_relative_eq!(pts[1].0, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pts[1].1, 1.0, epsilon = 1e-12);
        assert_eq!(r.transform(2.0), Transformed::Planar(2.0, 0.0));
    }

    #[test]
    fn polar_rejects_negative_radius() {
        assert!(matches!(Range::polar(-1.0, 2.0, 4), Err(DomainError::NegativeRadius { .. })));
        assert!(matches!(Range::polar(3.0, 2.0, 4), Err(DomainError::NegativeRadius { .. })));
    }

    #[test]
    fn rejects_zero_samples_and_nan() {
        assert_eq!(Range::linear(0.0, 1.0, 0).unwrap_err(), DomainError::ZeroSamples);
        assert!(matches!(
            Range::linear(f64::NAN, 1.0, 3),
            Err(DomainError::NonFinite { field: "start", .. })
        ));
        assert!(matches!(Range::linear(1.0, 1.0, 3), Err(DomainError::InvertedBounds { kind: "linear", .. })));
    }
}

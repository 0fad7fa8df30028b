// File: crates/plotgrid-core/tests/properties.rs
// Purpose: Property checks for range sampling, transforms and tick derivation.

use approx::assert_relative_eq;
use plotgrid_core::{Axis, AxisStyle, DomainError, Range, RangeKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn linear_samples_span_domain(start in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6, n in 2usize..500) {
        let stop = start + span;
        let r = Range::linear(start, stop, n).unwrap();
        let d = r.domain().as_scalar().unwrap();
        prop_assert_eq!(d.len(), n);
        prop_assert_eq!(d[0], start);
        prop_assert_eq!(d[n - 1], stop);
        prop_assert!(d.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(r.transformed().as_scalar().unwrap(), d);
    }

    #[test]
    fn wide_finite_bounds_stay_finite(scale in 0.5f64..=1.0, n in 2usize..64) {
        let (start, stop) = (-f64::MAX * scale, f64::MAX);
        let r = Range::linear(start, stop, n).unwrap();
        let d = r.domain().as_scalar().unwrap();
        prop_assert_eq!(d[0], start);
        prop_assert_eq!(d[n - 1], stop);
        prop_assert!(d.iter().all(|v| v.is_finite()));
        prop_assert!(d.windows(2).all(|w| w[0] < w[1]));
        let ticks = Axis::new(r, AxisStyle::default()).ticks();
        let finite_labels = ticks.iter().all(|t| !t.label.contains("NaN") && !t.label.contains("inf"));
        prop_assert!(finite_labels, "non-finite tick label in {:?}", ticks);
    }

    #[test]
    fn log_transform_matches_domain(start in 1.0e-3f64..1.0e3, factor in 1.5f64..1.0e4, n in 2usize..200, base in prop::sample::select(vec![2.0f64, std::f64::consts::E, 10.0, 3.0])) {
        let stop = start * factor;
        let r = Range::log(start, stop, n, base).unwrap();
        let d = r.domain().as_scalar().unwrap();
        let t = r.transformed().as_scalar().unwrap();
        prop_assert_eq!(d[0], start);
        prop_assert_eq!(d[n - 1], stop);
        for (&dv, &tv) in d.iter().zip(t) {
            prop_assert_eq!(r.transform(dv).along_axis(), tv);
            let back = base.powf(tv);
            prop_assert!((back - dv).abs() <= 1e-9 * dv.abs().max(1.0), "{back} vs {dv}");
        }
    }

    #[test]
    fn hyperbolic_is_exact_reciprocal(start in 1.0e-2f64..1.0e3, span in 1.0e-2f64..1.0e3, n in 2usize..200, negative in any::<bool>()) {
        let (lo, hi) = if negative { (-(start + span), -start) } else { (start, start + span) };
        let r = Range::hyperbolic(lo, hi, n).unwrap();
        let d = r.domain().as_scalar().unwrap();
        let t = r.transformed().as_scalar().unwrap();
        for (&dv, &tv) in d.iter().zip(t) {
            prop_assert_eq!(tv, 1.0 / dv);
            prop_assert!((1.0 / tv - dv).abs() <= 1e-9 * dv.abs());
        }
    }

    #[test]
    fn ticks_always_five(n in 1usize..1000, kind in prop::sample::select(vec![RangeKind::Linear, RangeKind::log10(), RangeKind::Polar, RangeKind::Hyperbolic])) {
        let r = Range::new(1.0, 50.0, n, kind).unwrap();
        let ticks = Axis::new(r, AxisStyle::default()).ticks();
        prop_assert_eq!(ticks.len(), 5);
        prop_assert_eq!(ticks[0].label.as_str(), "1.00");
        prop_assert_eq!(ticks[4].label.as_str(), "50.00");
    }

    #[test]
    fn inverted_bounds_are_rejected(start in -1.0e3f64..1.0e3, drop in 0.0f64..1.0e3) {
        let stop = start - drop;
        let inverted = matches!(Range::linear(start, stop, 10), Err(DomainError::InvertedBounds { .. }));
        prop_assert!(inverted, "linear [{}, {}] should be rejected as inverted", start, stop);
        prop_assert!(Range::hyperbolic(start, stop, 10).is_err());
    }

    #[test]
    fn non_positive_log_start_is_rejected(start in -1.0e3f64..=0.0, stop in 1.0f64..1.0e3) {
        prop_assert_eq!(
            Range::log(start, stop, 10, 10.0).unwrap_err(),
            DomainError::NonPositiveLogBound { start, stop }
        );
    }
}

#[test]
fn linear_scenario() {
    let r = Range::new(0.0, 10.0, 5, RangeKind::Linear).unwrap();
    assert_eq!(r.domain().as_scalar().unwrap(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(r.transformed().as_scalar().unwrap(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn log_scenario() {
    let r = Range::new(1.0, 100.0, 3, RangeKind::Log { base: 10.0 }).unwrap();
    let t = r.transformed().as_scalar().unwrap();
    assert_eq!(t, &[0.0, 1.0, 2.0]);
    for (dv, tv) in r.domain().as_scalar().unwrap().iter().zip(t) {
        assert_relative_eq!(dv.log10(), *tv);
    }
}

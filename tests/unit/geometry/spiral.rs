use super::*;
use crate::foundation::core::Point;
use crate::geometry::MIN_EXTENT;

fn straight_pivots() -> Vec<Point> {
    vec![Point::new(100.0, 0.0), Point::new(0.0, 0.0)]
}

#[test]
fn fewer_than_two_pivots_trace_nothing() {
    assert!(trace(&[]).is_empty());
    assert!(trace(&[Point::new(3.0, 4.0)]).is_empty());
}

#[test]
fn first_point_sits_on_the_start_pivot() {
    let out = trace(&straight_pivots());
    assert!((out[0].x - 100.0).abs() < 1e-9);
    assert!(out[0].y.abs() < 1e-9);
}

#[test]
fn radius_decays_strictly_toward_the_origin() {
    let origin = Point::new(0.0, 0.0);
    let out = trace(&straight_pivots());
    let mut prev = f64::INFINITY;
    for p in &out {
        let r = origin.distance(*p);
        assert!(r < prev);
        prev = r;
    }
}

#[test]
fn trace_stops_just_above_the_radius_threshold() {
    let origin = Point::new(0.0, 0.0);
    let out = trace(&straight_pivots());
    let last = origin.distance(out[out.len() - 1]);
    assert!(last > MIN_EXTENT);
    // One more decay step would have fallen through the threshold.
    assert!(last * SpiralParams::golden().decay() <= MIN_EXTENT + 1e-9);
}

#[test]
fn quarter_turn_lands_on_the_perpendicular() {
    let params = SpiralParams::golden();
    let out = trace_with(&straight_pivots(), params);
    let i = params.slices() as usize;
    assert!(out.len() > i);
    let expected_r = 100.0 * params.decay().powi(params.slices() as i32);
    assert!(out[i].x.abs() < 1e-6);
    assert!((out[i].y - expected_r).abs() < 1e-6);
}

#[test]
fn start_angle_follows_the_pivot_pair() {
    // Start pivot straight above the origin: theta0 = atan2(-, 0) = -π/2.
    let out = trace(&[Point::new(50.0, 10.0), Point::new(50.0, 60.0)]);
    assert!((out[0].x - 50.0).abs() < 1e-9);
    assert!((out[0].y - 10.0).abs() < 1e-9);
}

#[test]
fn params_reject_non_contracting_decay() {
    assert!(SpiralParams::new(1000, 1.0).is_err());
    assert!(SpiralParams::new(1000, 1.5).is_err());
    assert!(SpiralParams::new(1000, 0.0).is_err());
    assert!(SpiralParams::new(0, 0.5).is_err());
    assert!(SpiralParams::new(4, 0.5).is_ok());
}

#[test]
fn golden_params_contract_per_step() {
    let p = SpiralParams::golden();
    assert_eq!(p.slices(), 1000);
    assert!(p.decay() > 0.0 && p.decay() < 1.0);
    assert!((p.step_angle() - std::f64::consts::FRAC_PI_2 / 1000.0).abs() < 1e-15);
}

#[test]
fn coarse_params_trace_shorter_polylines() {
    let fine = trace_with(&straight_pivots(), SpiralParams::golden());
    let coarse = trace_with(&straight_pivots(), SpiralParams::new(10, 0.9).unwrap());
    assert!(coarse.len() < fine.len());
}

use super::*;

fn wire(x: f64, y: f64, w: f64, h: f64, ts: f64) -> NormalizedPoint {
    NormalizedPoint {
        x,
        y,
        intensity: 1.0,
        container_width: w,
        container_height: h,
        timestamp: ts,
    }
}

#[test]
fn from_local_snapshots_current_container_box() {
    let local = TrailPoint::new(200.0, 150.0, 0.9, 1000.0, 4.0);
    let normalized = NormalizedPoint::from_local(&local, 400.0, 300.0);
    assert!((normalized.x - 200.0).abs() < f64::EPSILON);
    assert!((normalized.y - 150.0).abs() < f64::EPSILON);
    assert!((normalized.intensity - 0.9).abs() < f64::EPSILON);
    assert!((normalized.container_width - 400.0).abs() < f64::EPSILON);
    assert!((normalized.container_height - 300.0).abs() < f64::EPSILON);
    assert!((normalized.timestamp - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn identical_dimensions_round_trip_exactly() {
    let p = wire(123.0, 45.0, 640.0, 480.0, 0.0);
    let rescaled = p.rescale(640.0, 480.0, 0.0);
    assert!((rescaled.x - 123.0).abs() < f64::EPSILON);
    assert!((rescaled.y - 45.0).abs() < f64::EPSILON);
}

#[test]
fn cross_size_rescale_doubles_coordinates() {
    // Producer 400x300 publishes (200,150); consumer 800x600 sees (400,300).
    let p = wire(200.0, 150.0, 400.0, 300.0, 0.0);
    let rescaled = p.rescale(800.0, 600.0, 0.0);
    assert!((rescaled.x - 400.0).abs() < f64::EPSILON);
    assert!((rescaled.y - 300.0).abs() < f64::EPSILON);
}

#[test]
fn axes_scale_independently() {
    let p = wire(100.0, 100.0, 200.0, 400.0, 0.0);
    let rescaled = p.rescale(400.0, 100.0, 0.0);
    assert!((rescaled.x - 200.0).abs() < f64::EPSILON);
    assert!((rescaled.y - 25.0).abs() < f64::EPSILON);
}

#[test]
fn fresh_point_has_no_age_fade() {
    let p = wire(10.0, 10.0, 100.0, 100.0, 5000.0);
    assert!((p.age_fade(5000.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn age_fade_is_linear_over_horizon() {
    let p = wire(10.0, 10.0, 100.0, 100.0, 0.0);
    let halfway = AGE_FADE_HORIZON_MS / 2.0;
    assert!((p.age_fade(halfway) - 0.5).abs() < 1e-12);
}

#[test]
fn age_fade_floors_at_zero_past_horizon() {
    let p = wire(10.0, 10.0, 100.0, 100.0, 0.0);
    assert!(p.age_fade(AGE_FADE_HORIZON_MS * 3.0).abs() < f64::EPSILON);
}

#[test]
fn future_timestamp_is_treated_as_age_zero() {
    let p = wire(10.0, 10.0, 100.0, 100.0, 9000.0);
    assert!((p.age_fade(1000.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn age_fade_compounds_with_intensity_on_rescale() {
    let mut p = wire(10.0, 10.0, 100.0, 100.0, 0.0);
    p.intensity = 0.8;
    let rescaled = p.rescale(100.0, 100.0, AGE_FADE_HORIZON_MS / 2.0);
    assert!((rescaled.intensity - 0.4).abs() < 1e-12);
}

#[test]
fn malformed_points_are_dropped_individually() {
    let good = wire(10.0, 10.0, 100.0, 100.0, 0.0);
    let nan_coord = wire(f64::NAN, 10.0, 100.0, 100.0, 0.0);
    let zero_container = wire(10.0, 10.0, 0.0, 100.0, 0.0);
    let batch = [nan_coord, good, zero_container];

    let rescaled = rescale_batch(&batch, 100.0, 100.0, 0.0);
    assert_eq!(rescaled.len(), 1);
    assert!((rescaled[0].x - 10.0).abs() < f64::EPSILON);
}

#[test]
fn fully_aged_points_are_skipped_by_batch_rescale() {
    let stale = wire(10.0, 10.0, 100.0, 100.0, 0.0);
    let rescaled = rescale_batch(&[stale], 100.0, 100.0, AGE_FADE_HORIZON_MS + 1.0);
    assert!(rescaled.is_empty());
}

#[test]
fn empty_batch_rescales_to_empty() {
    assert!(rescale_batch(&[], 100.0, 100.0, 0.0).is_empty());
}

#[test]
fn wire_serde_uses_snake_case_fields() {
    let p = wire(1.0, 2.0, 300.0, 400.0, 500.0);
    let json = serde_json::to_value(p).unwrap();
    assert!((json["container_width"].as_f64().unwrap() - 300.0).abs() < f64::EPSILON);
    assert!((json["container_height"].as_f64().unwrap() - 400.0).abs() < f64::EPSILON);
    assert!((json["timestamp"].as_f64().unwrap() - 500.0).abs() < f64::EPSILON);

    let back: NormalizedPoint = serde_json::from_value(json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn missing_field_fails_deserialization() {
    let raw = r#"{"x": 1.0, "y": 2.0, "intensity": 0.5}"#;
    assert!(serde_json::from_str::<NormalizedPoint>(raw).is_err());
}

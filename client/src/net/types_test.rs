use super::*;

#[test]
fn slide_deserializes_from_backend_shape() {
    let raw = r#"{
        "id": "bar_chart",
        "title": "Bar Chart",
        "chart_type": "bar",
        "data": {"xAxis": ["Jan"], "series": [120]}
    }"#;
    let slide: Slide = serde_json::from_str(raw).unwrap();
    assert_eq!(slide.id, "bar_chart");
    assert_eq!(slide.chart_type, "bar");
    assert!(slide.data.get("series").is_some());
}

#[test]
fn points_response_carries_active_flag() {
    let raw = r#"{"points": [], "active": true}"#;
    let resp: PointsResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.active);
    assert!(resp.points.is_empty());
}

#[test]
fn points_response_round_trips_normalized_points() {
    let raw = r#"{
        "points": [{"x": 200.0, "y": 150.0, "intensity": 1.0,
                    "container_width": 400.0, "container_height": 300.0,
                    "timestamp": 1000.0}],
        "active": true
    }"#;
    let resp: PointsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.points.len(), 1);
    assert!((resp.points[0].container_width - 400.0).abs() < f64::EPSILON);
}

#[test]
fn counter_label_is_one_based() {
    let resp = SlideListResponse { slides: Vec::new(), current_index: 1, total: 4 };
    assert_eq!(resp.counter_label(), "Slide 2 of 4");
}

use super::*;
use crate::state::test_helpers::{point_aged, test_app_state};
use overlay::consts::MAX_TRAIL_LEN;

#[tokio::test]
async fn push_then_fetch_returns_point() {
    let state = test_app_state();
    let point = point_aged(now_epoch_ms(), 0.0);
    push_point(State(state.clone()), Json(point)).await.unwrap();

    let Json(resp) = get_points(State(state)).await;
    assert_eq!(resp.points.len(), 1);
    assert!((resp.points[0].x - 200.0).abs() < f64::EPSILON);
    assert!((resp.points[0].container_width - 400.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn malformed_point_is_rejected() {
    let state = test_app_state();
    let mut point = point_aged(now_epoch_ms(), 0.0);
    point.x = f64::NAN;
    let err = push_point(State(state.clone()), Json(point)).await.unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);

    let Json(resp) = get_points(State(state)).await;
    assert!(resp.points.is_empty());
}

#[tokio::test]
async fn zero_container_dimension_is_rejected() {
    let state = test_app_state();
    let mut point = point_aged(now_epoch_ms(), 0.0);
    point.container_height = 0.0;
    let err = push_point(State(state), Json(point)).await.unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn stale_points_are_pruned_from_fetch() {
    let state = test_app_state();
    // Captured ten seconds ago: past the five-second age horizon.
    let stale = point_aged(now_epoch_ms(), 10_000.0);
    push_point(State(state.clone()), Json(stale)).await.unwrap();

    let Json(resp) = get_points(State(state)).await;
    assert!(resp.points.is_empty());
}

#[tokio::test]
async fn channel_is_capped_at_trail_bound() {
    let state = test_app_state();
    for _ in 0..(MAX_TRAIL_LEN + 20) {
        let point = point_aged(now_epoch_ms(), 0.0);
        push_point(State(state.clone()), Json(point)).await.unwrap();
    }
    let Json(resp) = get_points(State(state)).await;
    assert_eq!(resp.points.len(), MAX_TRAIL_LEN);
}

#[tokio::test]
async fn active_flag_round_trips() {
    let state = test_app_state();
    set_active(State(state.clone()), Json(ActiveBody { active: true })).await;
    let Json(resp) = get_points(State(state.clone())).await;
    assert!(resp.active);

    set_active(State(state.clone()), Json(ActiveBody { active: false })).await;
    let Json(resp) = get_points(State(state)).await;
    assert!(!resp.active);
}

#[tokio::test]
async fn clear_empties_point_set_immediately() {
    let state = test_app_state();
    let point = point_aged(now_epoch_ms(), 0.0);
    push_point(State(state.clone()), Json(point)).await.unwrap();

    clear(State(state.clone())).await;
    let Json(resp) = get_points(State(state)).await;
    assert!(resp.points.is_empty());
}

#[tokio::test]
async fn duplicate_pushes_are_tolerated() {
    // Best-effort channel: duplicates are allowed, consumers replace wholesale.
    let state = test_app_state();
    let point = point_aged(now_epoch_ms(), 0.0);
    push_point(State(state.clone()), Json(point)).await.unwrap();
    push_point(State(state.clone()), Json(point)).await.unwrap();

    let Json(resp) = get_points(State(state)).await;
    assert_eq!(resp.points.len(), 2);
}

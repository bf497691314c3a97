use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn current_slide_returns_first_demo_slide() {
    let state = test_app_state();
    let Json(slide) = current_slide(State(state)).await;
    assert_eq!(slide.id, "line_chart");
    assert_eq!(slide.chart_type, "line");
}

#[tokio::test]
async fn list_slides_reports_cursor_and_total() {
    let state = test_app_state();
    let Json(resp) = list_slides(State(state)).await;
    assert_eq!(resp.total, 4);
    assert_eq!(resp.current_index, 0);
    assert_eq!(resp.slides.len(), 4);
}

#[tokio::test]
async fn next_advances_and_wraps() {
    let state = test_app_state();
    let Json(second) = next_slide(State(state.clone())).await;
    assert_eq!(second.id, "bar_chart");

    for _ in 0..3 {
        next_slide(State(state.clone())).await;
    }
    let Json(resp) = list_slides(State(state)).await;
    assert_eq!(resp.current_index, 0);
}

#[tokio::test]
async fn previous_wraps_to_last_slide() {
    let state = test_app_state();
    let Json(slide) = previous_slide(State(state)).await;
    assert_eq!(slide.id, "scatter_chart");
}

#[tokio::test]
async fn goto_moves_shared_cursor() {
    let state = test_app_state();
    let slide = goto_slide(State(state.clone()), Path(2)).await.unwrap();
    assert_eq!(slide.id, "pie_chart");

    // The cursor moved for every reader, not just the caller.
    let Json(current) = current_slide(State(state)).await;
    assert_eq!(current.id, "pie_chart");
}

#[tokio::test]
async fn goto_out_of_range_is_not_found() {
    let state = test_app_state();
    let err = goto_slide(State(state.clone()), Path(99)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);

    let Json(resp) = list_slides(State(state)).await;
    assert_eq!(resp.current_index, 0);
}

#[test]
fn deck_error_mapping() {
    assert_eq!(deck_error_to_status(&DeckError::IndexOutOfRange(7)), StatusCode::NOT_FOUND);
    assert_eq!(deck_error_to_status(&DeckError::EmptyDeck), StatusCode::INTERNAL_SERVER_ERROR);
}

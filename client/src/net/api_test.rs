use super::*;

#[test]
fn goto_endpoint_embeds_index() {
    assert_eq!(goto_slide_endpoint(0), "/api/goto-slide/0");
    assert_eq!(goto_slide_endpoint(3), "/api/goto-slide/3");
}

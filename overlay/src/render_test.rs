use super::*;

#[test]
fn rgba_formats_css_color() {
    let c = Rgb::new(0, 255, 136);
    assert_eq!(c.rgba(1.0), "rgba(0, 255, 136, 1.0000)");
    assert_eq!(c.rgba(0.5), "rgba(0, 255, 136, 0.5000)");
}

#[test]
fn rgba_clamps_alpha() {
    let c = Rgb::new(10, 20, 30);
    assert_eq!(c.rgba(2.0), "rgba(10, 20, 30, 1.0000)");
    assert_eq!(c.rgba(-1.0), "rgba(10, 20, 30, 0.0000)");
    assert_eq!(c.rgba(f64::NAN), "rgba(10, 20, 30, 0.0000)");
}

#[test]
fn segment_alpha_scales_intensity_by_glow() {
    let style = LaserStyle::default();
    let alpha = segment_alpha(1.0, &style);
    assert!((alpha - GLOW_INTENSITY * 0.6).abs() < 1e-12);
    assert!(segment_alpha(0.0, &style).abs() < f64::EPSILON);
}

#[test]
fn segment_width_applies_render_scale() {
    assert!((segment_width(3.0) - 3.0 * STROKE_WIDTH_SCALE).abs() < 1e-12);
}

#[test]
fn producer_style_is_red_consumer_default_is_green() {
    assert_eq!(LaserStyle::producer().color, Rgb::new(0xff, 0x44, 0x44));
    assert_eq!(LaserStyle::default().color, Rgb::new(0x00, 0xff, 0x88));
}

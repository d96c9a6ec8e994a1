use vscan::{Document, Renderer, Rgb, Shape};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Polyline with a 20 degree corner at (80,50) pointing right
fn sharp_corner() -> Document {
    Document::new(120.0, 100.0)
        .push(Shape::polyline("10,37.66 80,50 10,62.34")
              .fill("none")
              .stroke("black")
              .stroke_width(10.0))
}

#[test]
fn sharp_corner_is_beveled() {
    init();
    let fb = vscan::render(&sharp_corner(), 120, 100).unwrap();
    assert_eq!(fb[(80,50)], Rgb::black());
    assert_eq!(fb[(90,50)], Rgb::white());
    // Butt caps end at the first point
    assert_eq!(fb[(12,38)], Rgb::black());
    assert_eq!(fb[(5,38)], Rgb::white());
}

#[test]
fn raised_miter_limit_keeps_miter() {
    init();
    let mut ren = Renderer::new();
    ren.miter_limit(10.0);
    let fb = ren.render(&sharp_corner(), 120, 100).unwrap();
    assert_eq!(fb[(90,50)], Rgb::black());
    assert_eq!(fb[(100,50)], Rgb::black());
    assert_eq!(fb[(112,50)], Rgb::white());
}

#[test]
fn right_angle_is_mitered() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::polyline("5,20 20,20 20,35")
              .fill("none")
              .stroke("black")
              .stroke_width(4.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    // Outer corner square reaches (22,18)
    assert_eq!(fb[(21,18)], Rgb::black());
    assert_eq!(fb[(22,18)], Rgb::white());
    assert_eq!(fb[(10,20)], Rgb::black());
    assert_eq!(fb[(10,17)], Rgb::white());
}

#[test]
fn stroke_width_scales_with_view() {
    init();
    let doc = Document::new(20.0, 20.0)
        .push(Shape::line(0.0, 10.0, 20.0, 10.0).stroke("black").stroke_width(2.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    // Two logical units become four pixel rows centered on row 20
    for y in 18 .. 22 {
        assert_eq!(fb[(5,y)], Rgb::black(), "row {}", y);
    }
    assert_eq!(fb[(5,17)], Rgb::white());
    assert_eq!(fb[(5,22)], Rgb::white());
}

#[test]
fn returning_polyline_joins_at_seam() {
    init();
    // Last point repeats the first, the corner at (10,10) is mitered
    let doc = Document::new(40.0, 40.0)
        .push(Shape::polyline("10,10 30,10 30,30 10,30 10,10")
              .fill("none")
              .stroke("black")
              .stroke_width(4.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert_eq!(fb[(8,8)], Rgb::black());
    assert_eq!(fb[(31,31)], Rgb::black());
    assert_eq!(fb[(7,7)], Rgb::white());
    assert_eq!(fb[(20,20)], Rgb::white());
}

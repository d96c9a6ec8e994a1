use vscan::{Document, PathCommand, Rgb, Shape, ShapeKind, Vertex};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn straight_cubic_round_trip() {
    init();
    let (path, err) = vscan::outline(&Shape::path("M0 0 C10 10 20 20 30 30").kind, 0.25).unwrap();
    assert!(err.is_none());
    assert_eq!(path.vertices, vec![Vertex::move_to(0.0, 0.0), Vertex::line_to(30.0, 30.0)]);
}

#[test]
fn relative_path_matches_absolute() {
    init();
    let abs = Document::new(50.0, 50.0)
        .push(Shape::path("M10 10 L40 10 L40 40 C40 45 10 45 10 40 Z"));
    let rel = Document::new(50.0, 50.0)
        .push(Shape::path("m10 10 30 0 0 30 c0 5 -30 5 -30 0 z"));
    assert_eq!(vscan::render(&abs, 50, 50).unwrap(),
               vscan::render(&rel, 50, 50).unwrap());
}

#[test]
fn packed_arc_flags() {
    init();
    // Two half circles of radius 10 around (20,20)
    let packed = Document::new(40.0, 40.0)
        .push(Shape::path("M10 20a10 10 0 1120 0a10 10 0 11-20 0z"));
    let circle = Document::new(40.0, 40.0)
        .push(Shape::circle(20.0, 20.0, 10.0));
    let fb = vscan::render(&packed, 40, 40).unwrap();
    assert_eq!(fb[(20,20)], Rgb::black());
    assert_eq!(fb[(20,12)], Rgb::black());
    assert_eq!(fb[(20,28)], Rgb::black());
    assert_eq!(fb[(20,8)], Rgb::white());
    assert_eq!(fb[(3,3)], Rgb::white());
    let reference = vscan::render(&circle, 40, 40).unwrap();
    assert_eq!(fb[(12,20)], reference[(12,20)]);
}

#[test]
fn malformed_path_draws_valid_prefix() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::path("M10 10 H30 V30 H10 Z M 5 x 5 L 0 0"));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert_eq!(fb[(20,20)], Rgb::black());
    assert_eq!(fb[(5,5)], Rgb::white());

    let parsed = vscan::parse_path("M10 10 H30 V30 H10 Z M 5 x 5");
    assert_eq!(parsed.segments.len(), 5);
    assert!(parsed.error.is_some());
}

#[test]
fn invalid_point_list_skips_shape() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::polygon("0,0 40,0 40"))
        .push(Shape::polyline("0,0 40,40 q"));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert!(fb.data.iter().all(|p| *p == Rgb::white()));
}

#[test]
fn rounded_rect_corners() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::rect(0.0, 0.0, 40.0, 40.0).corner_radii(Some(10.0), None));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert_eq!(fb[(1,1)], Rgb::white());
    assert_eq!(fb[(38,38)], Rgb::white());
    assert_eq!(fb[(10,1)], Rgb::black());
    assert_eq!(fb[(20,20)], Rgb::black());

    let (path, _) = vscan::outline(&doc_shape(&doc), 0.1).unwrap();
    assert_eq!(path.vertices.first(), Some(&Vertex::move_to(10.0, 0.0)));
    assert_eq!(path.vertices.last().map(|v| v.cmd), Some(PathCommand::Close));
}

fn doc_shape(doc: &Document) -> ShapeKind {
    match &doc.children[0] {
        vscan::Node::Shape(s) => s.kind.clone(),
        vscan::Node::Group(_) => unreachable!(),
    }
}

use vscan::{Document, Rgb, Shape};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn red_square() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::rect(10.0, 10.0, 20.0, 20.0).fill("#ff0000"));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert_eq!((fb.width, fb.height), (40, 40));
    for y in 0 .. 40 {
        for x in 0 .. 40 {
            let inside = (10 ..= 29).contains(&x) && (10 ..= 29).contains(&y);
            let want = if inside { Rgb::new(1.0, 0.0, 0.0) } else { Rgb::white() };
            assert_eq!(fb[(x,y)], want, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn stroked_ring() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::circle(20.0, 20.0, 10.0)
              .fill("none")
              .stroke("black")
              .stroke_width(2.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    for &(x,y) in &[(20,10), (20,30), (10,20), (30,20)] {
        assert_eq!(fb[(x,y)], Rgb::black(), "ring pixel {},{}", x, y);
    }
    assert_eq!(fb[(20,20)], Rgb::white());
    assert_eq!(fb[(20,5)], Rgb::white());
    assert_eq!(fb[(20,15)], Rgb::white());
    assert_eq!(fb[(35,35)], Rgb::white());
}

#[test]
fn ordered_overlap() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::rect(10.0, 10.0, 20.0, 20.0).fill("red"))
        .push(Shape::rect(10.0, 10.0, 20.0, 20.0).fill("blue").fill_opacity(0.5));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert!(fb[(15,15)].approx_eq(&Rgb::new(0.5, 0.0, 0.5), 1e-9), "{:?}", fb[(15,15)]);
    assert_eq!(fb[(5,5)], Rgb::white());
}

#[test]
fn group_opacity_and_order() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(vscan::Group::new()
              .push(Shape::rect(0.0, 0.0, 40.0, 40.0).fill("black"))
              .push(vscan::Group::new()
                    .push(Shape::rect(0.0, 0.0, 20.0, 40.0).fill("white").opacity(0.5))))
        .push(Shape::rect(30.0, 0.0, 10.0, 40.0).fill("lime").fill_opacity(2.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert!(fb[(5,5)].approx_eq(&Rgb::gray(0.5), 1e-9));
    assert_eq!(fb[(25,5)], Rgb::black());
    assert_eq!(fb[(35,5)], Rgb::new(0.0, 1.0, 0.0));
}

#[test]
fn transparent_paint_is_no_op() {
    init();
    let blank = vscan::render(&Document::new(40.0, 40.0), 40, 40).unwrap();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::rect(0.0, 0.0, 40.0, 40.0).fill("red").fill_opacity(0.0))
        .push(Shape::circle(20.0, 20.0, 15.0).fill("none").stroke("transparent"))
        .push(Shape::rect(5.0, 5.0, 10.0, 10.0).fill("red").opacity(0.0).stroke("blue"))
        .push(Shape::rect(5.0, 5.0, 10.0, 10.0).fill("no-such-color"));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert_eq!(fb, blank);
    assert!(fb.data.iter().all(|p| *p == Rgb::white()));
}

#[test]
fn rendering_is_idempotent() {
    init();
    let doc = Document::new(64.0, 64.0)
        .push(Shape::ellipse(32.0, 32.0, 25.0, 12.0).fill("teal").stroke("navy").stroke_width(3.0))
        .push(Shape::path("M10 50 Q32 0 54 50 T 60 60").fill("none").stroke("orange"))
        .push(Shape::polygon("5,5 20,5 12,18").fill("rgb(128, 0, 128)").fill_opacity(0.7));
    let a = vscan::render(&doc, 64, 64).unwrap();
    let b = vscan::render(&doc, 64, 64).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_renders_share_a_document() {
    init();
    let doc = std::sync::Arc::new(Document::new(30.0, 30.0)
        .push(Shape::circle(15.0, 15.0, 10.0).fill("green").stroke("black")));
    let expected = vscan::render(&doc, 30, 30).unwrap();
    let handles: Vec<_> = (0 .. 4).map(|_| {
        let doc = doc.clone();
        std::thread::spawn(move || vscan::render(&doc, 30, 30).unwrap())
    }).collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn far_off_canvas_shapes_are_clipped() {
    init();
    let doc = Document::new(40.0, 40.0)
        .push(Shape::polygon("-1e20,0 -2e20,0 -2e20,10"))
        .push(Shape::polygon("0,0 20,-1e20 0,-1e20"))
        .push(Shape::polygon("0,0 1e400,0 0,10"))
        .push(Shape::line(-1e20, -1e20, -1e20, 1e20).stroke("black").stroke_width(4.0));
    let fb = vscan::render(&doc, 40, 40).unwrap();
    assert!(fb.data.iter().all(|p| *p == Rgb::white()));
}

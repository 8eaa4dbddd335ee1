//! Behaviour of the gesture engine across whole touch sequences.

use picture_cutter::CropEngine;
use picture_cutter::geometry::Point;
use picture_cutter::state::{ImageSize, TouchSnapshot, Viewport};
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn engine(viewport: Viewport, image: (f64, f64)) -> Result<CropEngine, String> {
    let size = ImageSize::new(image.0, image.1).ok_or("bad image size")?;
    let mut e = CropEngine::new(viewport);
    e.set_image(size);
    Ok(e)
}

/// Cover and bounds checks with a little slack for float error.
fn assert_valid(e: &CropEngine) -> Result<(), String> {
    let eps = 1e-6;
    let image = e.image().ok_or("no image")?;
    let params = e.params().ok_or("no params")?;
    let vp = e.viewport();
    let bounds = params.bounds(vp, image);
    if params.compute_width(image) + eps < vp.width || params.compute_height(image) + eps < vp.height {
        return Err(format!("image no longer covers viewport: {params:?}"));
    }
    if params.scale + eps < params.min_scale {
        return Err(format!("scale below cover: {params:?}"));
    }
    if params.x > bounds.max_x + eps || params.x < bounds.min_x - eps {
        return Err(format!("x out of bounds: {params:?} {bounds:?}"));
    }
    if params.y > bounds.max_y + eps || params.y < bounds.min_y - eps {
        return Err(format!("y out of bounds: {params:?} {bounds:?}"));
    }
    if bounds.max_x != 0.0 || bounds.max_y != 0.0 {
        return Err("max bounds must stay at the origin".to_string());
    }
    Ok(())
}

#[test]
fn min_scale_and_initial_centering() -> Result<(), String> {
    let e = engine(Viewport::new(300.0, 200.0), (600.0, 100.0))?;
    let params = e.params().ok_or("no params")?;
    assert_eq!(params.min_scale, 2.0);
    assert_eq!(params.scale, 2.0);
    assert_eq!(params.x, -450.0);
    assert_eq!(params.y, 0.0);
    Ok(())
}

#[test]
fn dragging_past_the_edge_stops_at_the_edge() -> Result<(), String> {
    let mut e = engine(Viewport::new(300.0, 200.0), (600.0, 100.0))?;
    e.touch_start(&[p(250.0, 100.0)]);
    e.touch_move(&[p(-750.0, 100.0)]);
    assert_eq!(e.params().ok_or("no params")?.x, -900.0);
    assert_valid(&e)
}

#[test]
fn pinch_then_lift_one_finger_continues_without_jump() -> Result<(), String> {
    let mut e = engine(Viewport::new(200.0, 200.0), (400.0, 400.0))?;
    e.touch_start(&[p(80.0, 100.0), p(120.0, 100.0)]);
    e.touch_move(&[p(60.0, 100.0), p(140.0, 100.0)]);
    let zoomed = *e.params().ok_or("no params")?;
    assert_eq!(zoomed.scale, 1.0);

    e.touch_end(&[p(140.0, 100.0)]);
    assert_eq!(e.touch(), Some(&TouchSnapshot::Single(p(140.0, 100.0))));
    assert!(e.touch_move(&[p(140.0, 100.0)]));
    assert_eq!(*e.params().ok_or("no params")?, zoomed);

    e.touch_move(&[p(130.0, 90.0)]);
    let panned = e.params().ok_or("no params")?;
    assert_eq!(panned.x, zoomed.x - 10.0);
    assert_eq!(panned.y, zoomed.y - 10.0);

    e.touch_end(&[]);
    assert!(!e.is_touching());
    assert_valid(&e)
}

#[test]
fn pinch_zoom_keeps_midpoint_under_fingers() -> Result<(), String> {
    let mut e = engine(Viewport::new(200.0, 200.0), (200.0, 200.0))?;
    e.touch_start(&[p(90.0, 60.0), p(110.0, 60.0)]);
    e.touch_move(&[p(80.0, 60.0), p(120.0, 60.0)]);
    let params = e.params().ok_or("no params")?;
    assert_eq!(params.scale, 2.0);
    // image point (100, 60) still sits under the midpoint
    assert_eq!(params.x + 100.0 * params.scale, 100.0);
    assert_eq!(params.y + 60.0 * params.scale, 60.0);
    assert_valid(&e)
}

#[test]
fn resize_keeps_valid_pan_untouched() -> Result<(), String> {
    let mut e = engine(Viewport::new(300.0, 200.0), (600.0, 100.0))?;
    e.touch_start(&[p(0.0, 0.0)]);
    e.touch_move(&[p(-200.0, 0.0)]);
    let before = e.params().ok_or("no params")?.x;
    assert_eq!(before, -650.0);
    e.resize(Viewport::new(500.0, 200.0));
    assert_eq!(e.params().ok_or("no params")?.x, before);
    assert_valid(&e)?;

    // shrinking the room to pan pulls x back in
    e.resize(Viewport::new(1000.0, 200.0));
    assert_valid(&e)
}

#[test]
fn resize_before_image_is_tolerated() -> Result<(), String> {
    let mut e = CropEngine::new(Viewport::default());
    assert!(!e.resize(Viewport::new(320.0, 240.0)));
    e.set_image(ImageSize::new(640.0, 480.0).ok_or("bad image size")?);
    let params = e.params().ok_or("no params")?;
    assert_eq!(params.min_scale, 0.5);
    assert_eq!((params.x, params.y), (0.0, 0.0));
    Ok(())
}

#[test]
fn replacing_the_image_recenters() -> Result<(), String> {
    let mut e = engine(Viewport::new(300.0, 200.0), (600.0, 100.0))?;
    e.touch_start(&[p(0.0, 0.0)]);
    e.touch_move(&[p(300.0, 0.0)]);
    e.set_image(ImageSize::new(300.0, 400.0).ok_or("bad image size")?);
    let params = e.params().ok_or("no params")?;
    assert_eq!(params.scale, 1.0);
    assert_eq!((params.x, params.y), (0.0, -100.0));
    Ok(())
}

#[derive(Debug, Clone)]
enum Step {
    Start(Vec<Point>),
    Move(Vec<Point>),
    End(Vec<Point>),
    Resize(Viewport),
}

fn contacts() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-140.0..460.0f64, -160.0..640.0f64), 0..=3)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| p(x, y)).collect::<Vec<Point>>())
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => contacts().prop_map(Step::Start),
        6 => contacts().prop_map(Step::Move),
        2 => contacts().prop_map(Step::End),
        1 => (100.0..1000.0f64, 100.0..1000.0f64)
            .prop_map(|(w, h)| Step::Resize(Viewport::new(w, h))),
    ]
}

proptest! {
    /// Property: any sequence of touches and resizes keeps the image covering
    /// the viewport with its top-left inside the pan bounds.
    #[test]
    fn prop_gesture_sequences_stay_valid(steps in prop::collection::vec(step(), 1..200)) {
        let mut e = engine(Viewport::new(320.0, 480.0), (1024.0, 768.0))
            .map_err(|err| TestCaseError::fail(err))?;
        for (i, s) in steps.iter().enumerate() {
            match s {
                Step::Start(points) => {
                    e.touch_start(points);
                }
                Step::Move(points) => {
                    e.touch_move(points);
                }
                Step::End(points) => e.touch_end(points),
                Step::Resize(vp) => {
                    e.resize(*vp);
                }
            }
            let checked = assert_valid(&e);
            prop_assert!(checked.is_ok(), "step {} ({:?}): {:?}", i, s, checked);
        }
    }

    /// Property: lifting fingers never begins a gesture on its own.
    #[test]
    fn prop_end_never_starts_tracking(remaining in contacts()) {
        let mut e = engine(Viewport::new(300.0, 200.0), (600.0, 100.0))
            .map_err(|err| TestCaseError::fail(err))?;
        e.touch_end(&remaining);
        prop_assert!(!e.is_touching());
    }
}

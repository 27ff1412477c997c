//! Scenario tests for two-frame indexed access on `Image`.

use ndarray::Array2;

use pixframe::{
    Box2I, Extent2I, Image, Indexed, Origin, PixframeError, Point2I,
};

/// Image anchored at (10, 20) with extent (5, 5), pixel value = 100*y + x
/// in Local coordinates.
fn sample() -> Image<i32> {
    let pixels = Array2::from_shape_fn((5, 5), |(row, col)| 100 * row as i32 + col as i32);
    Image::from_pixels(pixels, Point2I::new(10, 20))
}

#[test]
fn parent_anchor_and_local_zero_address_the_same_pixel() {
    let mut img = sample();
    img.set(Point2I::new(10, 20), -7).expect("set anchor pixel");

    let parent = img
        .get(Point2I::new(10, 20))
        .expect("get parent")
        .into_element();
    let local = img
        .get_in(Point2I::new(0, 0), Origin::Local)
        .expect("get local")
        .into_element();
    assert_eq!(parent, Some(-7));
    assert_eq!(parent, local);
}

#[test]
fn parent_point_hits_local_zero() {
    let img = sample();
    let v = img
        .get(Point2I::new(10, 20))
        .expect("get")
        .into_element();
    assert_eq!(v, Some(0));
}

#[test]
fn local_negative_point_is_end_relative() {
    let img = sample();
    let v = img
        .get_in((-1, -1), Origin::Local)
        .expect("get bottom-right")
        .into_element();
    assert_eq!(v, Some(404));
}

#[test]
fn parent_negative_point_is_rejected() {
    let img = sample();
    let err = img.get((-1, -1)).expect_err("negative parent index");
    assert_eq!(err, PixframeError::NegativeParentIndex { index: -1 });
}

#[test]
fn negative_absolute_pixels_are_reachable_through_points() {
    // A container whose anchor itself is negative: Parent-frame negative
    // coordinates are legitimate when given as a Point2I.
    let mut img = Image::new(
        Box2I::new(Point2I::new(-5, -3), Extent2I::new(4, 4)),
        0_i32,
    );
    img.set(Point2I::new(-5, -3), 1).expect("set corner");
    let v = img
        .get(Point2I::new(-5, -3))
        .expect("get corner")
        .into_element();
    assert_eq!(v, Some(1));
}

#[test]
fn range_pair_views_match_between_frames() {
    let img = sample();

    let parent = img
        .get((11..13, 22..25))
        .expect("parent ranges")
        .into_view()
        .expect("view");
    let local = img
        .get_in((1..3, 2..5), Origin::Local)
        .expect("local ranges")
        .into_view()
        .expect("view");

    assert_eq!(parent.shape(), [3, 2]);
    assert_eq!(parent, local);
    assert_eq!(parent[[0, 0]], 201);
}

#[test]
fn local_range_size_is_anchor_independent() {
    for anchor in [Point2I::new(0, 0), Point2I::new(10, 20), Point2I::new(-4, -9)] {
        let img = Image::new(Box2I::new(anchor, Extent2I::new(6, 7)), 0_u16);
        let view = img
            .get_in((1..4, 2..4), Origin::Local)
            .expect("local ranges")
            .into_view()
            .expect("view");
        assert_eq!(view.shape(), [2, 3]);
    }
}

#[test]
fn whole_image_selectors_view_everything() {
    let img = sample();

    let bare = img.get(..).expect("bare full range").into_view().expect("view");
    assert_eq!(bare, img.pixels().view());

    let pair = img
        .get_in((.., ..), Origin::Local)
        .expect("full range pair")
        .into_view()
        .expect("view");
    assert_eq!(pair, img.pixels().view());

    // Under Parent the omitted bounds default to the parent extent too.
    let parent_pair = img.get((.., ..)).expect("parent pair").into_view().expect("view");
    assert_eq!(parent_pair, img.pixels().view());
}

#[test]
fn box_selector_views_the_region() {
    let img = sample();
    let region = Box2I::new(Point2I::new(12, 21), Extent2I::new(2, 3));
    let view = img.get(region).expect("box").into_view().expect("view");
    assert_eq!(view.shape(), [3, 2]);
    assert_eq!(view[[0, 0]], 102);
}

#[test]
fn box_selector_respects_local_origin() {
    let img = sample();
    let region = Box2I::new(Point2I::new(2, 1), Extent2I::new(2, 3));
    let view = img
        .get_in(region, Origin::Local)
        .expect("local box")
        .into_view()
        .expect("view");
    assert_eq!(view[[0, 0]], 102);
}

#[test]
fn fetched_debug_names_the_variant() {
    let img = sample();
    let element = img.get(Point2I::new(10, 20)).expect("point");
    assert_eq!(format!("{element:?}"), "Fetched::Element");
    let view = img.get(..).expect("whole image");
    assert_eq!(format!("{view:?}"), "Fetched::View");
}

#[test]
fn mixed_selector_kinds_are_rejected() {
    let img = sample();
    let err = img.get((5, 0..3)).expect_err("mixed kinds");
    assert_eq!(err, PixframeError::MixedSelectorKinds);
}

#[test]
fn scalar_fill_round_trips_in_both_frames() {
    let parent_region = Box2I::new(Point2I::new(11, 22), Extent2I::new(3, 2));

    let mut by_parent = sample();
    by_parent.set(parent_region, 55).expect("parent fill");

    let mut by_local = sample();
    by_local
        .set_in((1..4, 2..4), Origin::Local, 55)
        .expect("local fill");

    assert_eq!(by_parent.pixels(), by_local.pixels());
    let view = by_parent
        .get(parent_region)
        .expect("read back")
        .into_view()
        .expect("view");
    assert!(view.iter().all(|&v| v == 55));
}

#[test]
fn bulk_write_round_trips_through_the_fallback() {
    let mut img = sample();
    let block = Array2::from_shape_fn((2, 3), |(row, col)| -(10 * row as i32 + col as i32));

    img.set_from((11..14, 22..24), &block).expect("bulk write");

    let view = img
        .get((11..14, 22..24))
        .expect("read back")
        .into_view()
        .expect("view");
    assert_eq!(view, block.view());
}

#[test]
fn bulk_write_to_a_point_selector_is_rejected() {
    let mut img = sample();
    let block = Array2::from_elem((1, 1), 5);
    let err = img
        .set_from(Point2I::new(10, 20), &block)
        .expect_err("point selector");
    assert_eq!(err, PixframeError::ScalarRequired);
}

#[test]
fn element_write_through_point_selector() {
    let mut img = sample();
    img.set_in((2, 3), Origin::Local, 77).expect("local scalar pair");
    let v = img
        .get(Point2I::new(12, 23))
        .expect("parent point")
        .into_element();
    assert_eq!(v, Some(77));
}

#[test]
fn errors_leave_the_container_untouched() {
    let mut img = sample();
    let before = img.pixels().clone();
    assert!(img.set_in((-1..2, 0..2), Origin::Parent, 9).is_err());
    assert!(img.set((5, 0..3), 9).is_err());
    assert_eq!(img.pixels(), &before);
}

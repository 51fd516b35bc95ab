use std::io::Cursor;

use hand_eval::common::EvalBox;
use hand_eval::data::{extract_bboxes, load_bboxes};

#[test]
fn iou_of_identical_boxes_is_one() {
    let bbox = EvalBox::new(3, 7, 25, 40);
    assert_eq!(bbox.iou(&bbox), 1.0);
}

#[test]
fn iou_of_disjoint_boxes_is_zero() {
    let a = EvalBox::new(0, 0, 10, 10);
    let b = EvalBox::new(20, 20, 10, 10);
    assert_eq!(a.iou(&b), 0.0);
}

#[test]
fn iou_is_symmetric() {
    let a = EvalBox::new(0, 0, 10, 10);
    let b = EvalBox::new(5, 5, 10, 10);
    assert_eq!(a.iou(&b), b.iou(&a));
    // 25 / (100 + 100 - 25)
    assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "zero-area union")]
fn iou_of_two_degenerate_boxes_violates_contract() {
    let a = EvalBox::new(0, 0, 0, 0);
    let b = EvalBox::new(5, 5, 0, 0);
    a.iou(&b);
}

#[test]
fn extract_without_rescaling_is_identity() {
    let source = Cursor::new("0 0 10 10\n5 7 20 14\n");
    let boxes = extract_bboxes(source, 1.0);

    assert_eq!(boxes, vec![EvalBox::new(0, 0, 10, 10), EvalBox::new(5, 7, 20, 14)]);
}

#[test]
fn extract_skips_trailing_padding() {
    // A negative record and a short trailing record are both padding.
    let source = Cursor::new("0 0 10 10\n-1 -1 -1 -1\n3 4\n");
    let boxes = extract_bboxes(source, 1.0);

    assert_eq!(boxes, vec![EvalBox::new(0, 0, 10, 10)]);
}

#[test]
fn extract_handles_records_split_across_lines() {
    let source = Cursor::new("1 2\n3 4 5 6 7 8");
    let boxes = extract_bboxes(source, 1.0);

    assert_eq!(boxes, vec![EvalBox::new(1, 2, 3, 4), EvalBox::new(5, 6, 7, 8)]);
}

#[test]
fn quadruple_scale_doubles_each_side_around_center() {
    let source = Cursor::new("10 20 10 16\n");
    let boxes = extract_bboxes(source, 4.0);

    assert_eq!(boxes.len(), 1);
    let bbox = boxes[0];
    assert_eq!(bbox, EvalBox::new(5, 12, 20, 32));
    assert_eq!(bbox.cx(), EvalBox::new(10, 20, 10, 16).cx());
    assert_eq!(bbox.cy(), EvalBox::new(10, 20, 10, 16).cy());
}

#[test]
fn missing_annotation_file_yields_empty_set() {
    let boxes = load_bboxes("/nonexistent/annotations/42.txt", 1.0);
    assert!(boxes.is_empty());
}

#[test]
fn crop_clamps_negative_origin() {
    let mut bbox = EvalBox::new(-5, -5, 20, 20);
    bbox.crop_to(100, 100);
    assert_eq!(bbox, EvalBox::new(0, 0, 20, 20));
}

#[test]
fn crop_shrinks_overflowing_extent() {
    let mut bbox = EvalBox::new(90, 95, 20, 20);
    bbox.crop_to(100, 100);
    assert_eq!(bbox, EvalBox::new(90, 95, 10, 5));
}

#[test]
fn crop_leaves_interior_box_untouched() {
    let mut bbox = EvalBox::new(10, 10, 30, 30);
    bbox.crop_to(100, 100);
    assert_eq!(bbox, EvalBox::new(10, 10, 30, 30));
}

#[test]
fn crop_collapses_fully_outside_box() {
    let mut bbox = EvalBox::new(200, 300, 10, 10);
    bbox.crop_to(100, 100);

    assert!(bbox.is_empty() || bbox.area() == 0);
    assert!(bbox.x >= 0 && bbox.y >= 0);
    assert!(bbox.x_max() <= 100 && bbox.y_max() <= 100);
}

#[test]
fn crop_never_leaves_bounds() {
    let cases = [
        EvalBox::new(-50, -50, 10, 10),
        EvalBox::new(-10, 40, 200, 5),
        EvalBox::new(0, 0, 100, 100),
        EvalBox::new(99, 99, 1, 1),
        EvalBox::new(150, -20, 30, 300),
    ];
    for mut bbox in cases {
        bbox.crop_to(100, 100);
        assert!(bbox.x >= 0 && bbox.y >= 0, "{:?}", bbox);
        assert!(bbox.w >= 0 && bbox.h >= 0, "{:?}", bbox);
        assert!(bbox.x_max() <= 100 && bbox.y_max() <= 100, "{:?}", bbox);
    }
}

#[test]
fn shrinking_scale_halves_area() {
    let mut bbox = EvalBox::new(0, 0, 40, 40);
    bbox.scale_area(0.25);

    // pad = round(0.5 * 40 * (0.5 - 1)) = -10 on each side
    assert_eq!(bbox, EvalBox::new(10, 10, 20, 20));
}

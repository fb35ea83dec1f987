use super::*;
use crate::foundation::core::Size;

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    Rect::from_origin_size(Point::new(x, y), Size::new(w, h))
}

fn sample_pairs() -> Vec<(Rect, Rect)> {
    vec![
        (rect(0, 0, 100, 50), rect(0, 0, 30, 10)),
        (rect(10, 20, 101, 77), rect(-5, 13, 10, 9)),
        (rect(0, 0, 20, 20), rect(3, 4, 40, 35)),
        (rect(0, 0, 0, 0), rect(7, 7, 0, 0)),
        (rect(0, 0, 64, 64), rect(60, -2, 1, 1)),
    ]
}

#[test]
fn default_preserves_source_position() {
    for (parent, source) in sample_pairs() {
        assert_eq!(
            compute_rect(parent, source, Alignment::Default, VerticalAlignment::Default),
            source
        );
    }
}

#[test]
fn left_top_pin_to_origin() {
    for (parent, source) in sample_pairs() {
        let out = compute_rect(parent, source, Alignment::Left, VerticalAlignment::Top);
        assert_eq!(out, rect(0, 0, source.width(), source.height()));
    }
}

#[test]
fn right_bottom_pin_to_far_edge() {
    let out = compute_rect(
        rect(0, 0, 100, 50),
        rect(5, 5, 30, 10),
        Alignment::Right,
        VerticalAlignment::Bottom,
    );
    assert_eq!(out.min, Point::new(70, 40));
    assert_eq!(out.max, Point::new(100, 50));
}

#[test]
fn center_truncates_odd_remainder() {
    let out = compute_rect(
        rect(0, 0, 101, 11),
        rect(0, 0, 10, 4),
        Alignment::Center,
        VerticalAlignment::Middle,
    );
    assert_eq!((out.min.x, out.max.x), (45, 55));
    assert_eq!((out.min.y, out.max.y), (3, 7));
}

#[test]
fn center_of_oversized_source_truncates_toward_zero() {
    // (20 - 25) / 2 == -2 with truncation, not -3.
    let out = compute_rect(
        rect(0, 0, 20, 20),
        rect(0, 0, 25, 25),
        Alignment::Center,
        VerticalAlignment::Middle,
    );
    assert_eq!(out.min, Point::new(-2, -2));
    assert_eq!(out.max, Point::new(23, 23));
}

#[test]
fn parent_origin_does_not_shift_result() {
    let out = compute_rect(
        rect(500, 500, 100, 100),
        rect(0, 0, 10, 10),
        Alignment::Right,
        VerticalAlignment::Top,
    );
    assert_eq!(out, rect(90, 0, 10, 10));
}

#[test]
fn axes_are_independent() {
    let parent = rect(0, 0, 200, 100);
    let source = rect(12, 34, 20, 10);

    let out = compute_rect(parent, source, Alignment::Left, VerticalAlignment::Bottom);
    assert_eq!(out, rect(0, 90, 20, 10));

    let out = compute_rect(parent, source, Alignment::Default, VerticalAlignment::Middle);
    assert_eq!(out, rect(12, 45, 20, 10));

    let out = compute_rect(parent, source, Alignment::Center, VerticalAlignment::Default);
    assert_eq!(out, rect(90, 34, 20, 10));
}

#[test]
fn every_combination_preserves_extent_and_is_repeatable() {
    for (parent, source) in sample_pairs() {
        for h in Alignment::ALL {
            for v in VerticalAlignment::ALL {
                let a = compute_rect(parent, source, h, v);
                let b = compute_rect(parent, source, h, v);
                assert_eq!(a, b);
                assert_eq!(a.width(), source.width(), "{h:?}/{v:?}");
                assert_eq!(a.height(), source.height(), "{h:?}/{v:?}");
            }
        }
    }
}

#[test]
fn negative_extents_propagate_without_panicking() {
    let inverted = Rect::new(Point::new(10, 10), Point::new(4, 2));
    let out = compute_rect(
        rect(0, 0, 50, 50),
        inverted,
        Alignment::Right,
        VerticalAlignment::Middle,
    );
    assert_eq!(out.width(), -6);
    assert_eq!(out.height(), -8);
    assert_eq!(out.min.x, 56);

    let extreme = Rect::new(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
    let _ = compute_rect(extreme, extreme, Alignment::Center, VerticalAlignment::Bottom);
}

#[test]
fn unrecognized_codes_fall_back_to_default() {
    assert_eq!(Alignment::from_code(7), Alignment::Default);
    assert_eq!(Alignment::from_code(-1), Alignment::Default);
    assert_eq!(VerticalAlignment::from_code(42), VerticalAlignment::Default);

    let source = rect(3, 9, 10, 10);
    let out = compute_rect(
        rect(0, 0, 100, 100),
        source,
        Alignment::from_code(99),
        VerticalAlignment::from_code(-4),
    );
    assert_eq!(out, source);
}

#[test]
fn codes_round_trip() {
    for a in Alignment::ALL {
        assert_eq!(Alignment::from_code(a.code()), a);
    }
    for v in VerticalAlignment::ALL {
        assert_eq!(VerticalAlignment::from_code(v.code()), v);
    }
}

#[test]
fn serde_accepts_names_and_codes() {
    let a: Alignment = serde_json::from_str("\"center\"").unwrap();
    assert_eq!(a, Alignment::Center);
    let a: Alignment = serde_json::from_str("3").unwrap();
    assert_eq!(a, Alignment::Right);
    let a: Alignment = serde_json::from_str("12").unwrap();
    assert_eq!(a, Alignment::Default);
    assert!(serde_json::from_str::<Alignment>("\"sideways\"").is_err());

    let v: VerticalAlignment = serde_json::from_str("\"Bottom\"").unwrap();
    assert_eq!(v, VerticalAlignment::Bottom);
    assert_eq!(
        serde_json::to_string(&VerticalAlignment::Middle).unwrap(),
        "\"middle\""
    );
}

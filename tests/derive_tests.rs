//! Tests for derive macros (Lenses and Prisms).
//!
//! - `#[derive(Lenses)]`: one `{field}_lens()` per named field
//! - `#[derive(Prisms)]`: one `{variant}_prism()` per unit or single-field
//!   tuple variant, with the variant name in `snake_case`

use optikon::optics::{Lens, Optional, Prism};
use optikon::{Lenses, Prisms};
use rstest::rstest;

// =============================================================================
// Test Structures for Lenses derive
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Labelled<T> {
    label: String,
    value: T,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Segment {
    start: Point,
    end: Point,
}

// =============================================================================
// Test Structures for Prisms derive
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Shape {
    Circle(f64),
    Square(f64),
    Empty,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum ConnectionState {
    HandshakeInProgress(u8),
    Closed,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Canvas {
    shape: Shape,
}

// =============================================================================
// Lenses
// =============================================================================

#[rstest]
fn test_derived_lens_get_and_set() {
    let point = Point { x: 1, y: 2 };

    assert_eq!(*Point::x_lens().get(&point), 1);
    assert_eq!(*Point::y_lens().get(&point), 2);
    assert_eq!(Point::x_lens().set(point.clone(), 10), Point { x: 10, y: 2 });
    assert_eq!(point, Point { x: 1, y: 2 });
}

#[rstest]
fn test_derived_lens_on_generic_struct() {
    let labelled = Labelled {
        label: "answer".to_string(),
        value: 41_u64,
    };

    let bumped = Labelled::<u64>::value_lens().modify(labelled, |value| value + 1);
    assert_eq!(bumped.value, 42);
    assert_eq!(bumped.label, "answer");
}

#[rstest]
fn test_derived_lenses_compose() {
    let end_x = Segment::end_lens().compose(Point::x_lens());
    let segment = Segment {
        start: Point { x: 0, y: 0 },
        end: Point { x: 3, y: 4 },
    };

    assert_eq!(*end_x.get(&segment), 3);
    let moved = end_x.set(segment, -3);
    assert_eq!(moved.end, Point { x: -3, y: 4 });
    assert_eq!(moved.start, Point { x: 0, y: 0 });
}

#[rstest]
fn test_derived_lens_is_clone() {
    let lens = Point::y_lens();
    let copy = lens.clone();
    assert_eq!(copy.get(&Point { x: 0, y: 7 }), lens.get(&Point { x: 0, y: 7 }));
}

// =============================================================================
// Prisms
// =============================================================================

#[rstest]
#[case(Shape::Circle(1.5), Some(1.5), None)]
#[case(Shape::Square(2.0), None, Some(2.0))]
#[case(Shape::Empty, None, None)]
fn test_derived_prism_preview(
    #[case] shape: Shape,
    #[case] circle: Option<f64>,
    #[case] square: Option<f64>,
) {
    assert_eq!(Shape::circle_prism().preview(&shape).copied(), circle);
    assert_eq!(Shape::square_prism().preview(&shape).copied(), square);
}

#[rstest]
fn test_derived_prism_review() {
    assert_eq!(Shape::circle_prism().review(3.0), Shape::Circle(3.0));
    assert_eq!(Shape::empty_prism().review(()), Shape::Empty);
}

#[rstest]
fn test_derived_unit_prism_focuses_on_unit() {
    let empty_prism = Shape::empty_prism();
    assert_eq!(empty_prism.preview(&Shape::Empty), Some(&()));
    assert_eq!(empty_prism.preview(&Shape::Circle(1.0)), None);
    assert_eq!(empty_prism.preview_owned(Shape::Empty), Some(()));
}

#[rstest]
fn test_derived_prism_names_are_snake_case() {
    let handshake = ConnectionState::handshake_in_progress_prism();
    assert_eq!(
        handshake.preview(&ConnectionState::HandshakeInProgress(2)),
        Some(&2)
    );
    assert_eq!(
        ConnectionState::closed_prism().preview(&ConnectionState::Closed),
        Some(&())
    );
}

#[rstest]
fn test_derived_prism_modify_option() {
    let grown = Shape::square_prism().modify_option(Shape::Square(2.0), |side| side * 2.0);
    assert_eq!(grown, Some(Shape::Square(4.0)));
    assert_eq!(
        Shape::square_prism().modify_option(Shape::Empty, |side| side * 2.0),
        None
    );
}

// =============================================================================
// Lens and prism derives together
// =============================================================================

#[rstest]
fn test_derived_lens_compose_derived_prism() {
    let canvas_circle = Canvas::shape_lens().compose_prism(Shape::circle_prism());

    let round = Canvas {
        shape: Shape::Circle(1.0),
    };
    let blank = Canvas {
        shape: Shape::Empty,
    };

    assert_eq!(canvas_circle.get_option(&round), Some(&1.0));
    assert_eq!(canvas_circle.get_option(&blank), None);
    assert_eq!(
        canvas_circle.set(round, 2.0),
        Canvas {
            shape: Shape::Circle(2.0)
        }
    );
    assert_eq!(canvas_circle.set(blank.clone(), 2.0), blank);
}

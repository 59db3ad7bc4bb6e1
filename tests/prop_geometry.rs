//! Property-based tests for collision geometry and ship kinematics.
//!
//! Run with: cargo test --release prop_geometry

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use debris::{clamp, rectangles_overlap, Direction, Kinematics, Rectangle};

fn rectangle() -> impl Strategy<Value = Rectangle> {
    (-50.0f64..50.0, -50.0f64..50.0, 0u32..12, 0u32..12)
        .prop_map(|(row, column, rows, columns)| Rectangle::new(row, column, rows, columns))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Decrease),
        Just(Direction::Hold),
        Just(Direction::Increase),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    /// Overlap does not depend on argument order.
    #[test]
    fn prop_overlap_symmetric(a in rectangle(), b in rectangle()) {
        prop_assert_eq!(rectangles_overlap(&a, &b), rectangles_overlap(&b, &a));
    }

    /// A rectangle nested inside another always overlaps it.
    #[test]
    fn prop_nested_overlaps(
        outer in rectangle(),
        row_offset in 0u32..12,
        column_offset in 0u32..12,
        rows in 1u32..12,
        columns in 1u32..12,
    ) {
        let outer_rows = outer.rows.max(1);
        let outer_columns = outer.columns.max(1);
        let row_offset = row_offset % outer_rows;
        let column_offset = column_offset % outer_columns;
        let inner = Rectangle::new(
            outer.row + f64::from(row_offset),
            outer.column + f64::from(column_offset),
            rows.min(outer_rows - row_offset),
            columns.min(outer_columns - column_offset),
        );
        prop_assert!(rectangles_overlap(&outer, &inner));
        prop_assert!(rectangles_overlap(&inner, &outer));
    }

    /// Rectangles separated along either axis never overlap.
    #[test]
    fn prop_disjoint_no_overlap(a in rectangle(), b in rectangle(), gap in 0.0f64..20.0, below in any::<bool>()) {
        let b = if below {
            Rectangle { row: a.row + a.height() + gap, ..b }
        } else {
            Rectangle { column: a.column + a.width() + gap, ..b }
        };
        prop_assert!(!rectangles_overlap(&a, &b));
        prop_assert!(!rectangles_overlap(&b, &a));
    }

    /// Every rectangle overlaps itself, degenerate ones included.
    #[test]
    fn prop_overlaps_itself(a in rectangle()) {
        prop_assert!(rectangles_overlap(&a, &a));
    }

    /// Clamp returns the value when it is in range, else the nearer bound.
    #[test]
    fn prop_clamp(value in -100.0f64..100.0, low in -50.0f64..0.0, span in 0.0f64..50.0) {
        let high = low + span;
        let clamped = clamp(value, low, high);
        if (low..=high).contains(&value) {
            prop_assert!((clamped - value).abs() < f64::EPSILON);
        } else if value < low {
            prop_assert!((clamped - low).abs() < f64::EPSILON);
        } else {
            prop_assert!((clamped - high).abs() < f64::EPSILON);
        }
    }

    /// Speed stays within the limits whatever the input sequence.
    #[test]
    fn prop_speed_bounded(inputs in prop::collection::vec((direction(), direction()), 1..200)) {
        let k = Kinematics::default();
        let (mut row, mut column) = (0.0, 0.0);
        for (rows_direction, columns_direction) in inputs {
            (row, column) = k.update_velocity(row, column, rows_direction, columns_direction);
            prop_assert!(row.abs() <= k.row_speed_limit);
            prop_assert!(column.abs() <= k.column_speed_limit);
        }
    }

    /// Without input the ship comes to a full stop in bounded time.
    #[test]
    fn prop_coasts_to_rest(
        inputs in prop::collection::vec((direction(), direction()), 0..50),
        fading in 0.0f64..0.95,
    ) {
        let k = Kinematics { fading, ..Kinematics::default() };
        let (mut row, mut column) = (0.0, 0.0);
        for (rows_direction, columns_direction) in inputs {
            (row, column) = k.update_velocity(row, column, rows_direction, columns_direction);
        }
        for _ in 0..k.calls_to_rest() {
            (row, column) = k.update_velocity(row, column, Direction::Hold, Direction::Hold);
        }
        prop_assert!(row.abs() < f64::EPSILON);
        prop_assert!(column.abs() < f64::EPSILON);
    }
}

#![no_main]

use arbitrary::Arbitrary;
use debris::{Rectangle, rectangles_overlap};
use libfuzzer_sys::fuzz_target;

/// One rectangle with a bounded, finite corner.
#[derive(Arbitrary, Debug)]
struct RawRectangle {
    /// Top edge in tenths of a cell.
    row: i16,
    /// Left edge in tenths of a cell.
    column: i16,
    /// Height in cells.
    rows: u8,
    /// Width in cells.
    columns: u8,
}

impl RawRectangle {
    fn build(&self) -> Rectangle {
        Rectangle::new(
            f64::from(self.row) / 10.0,
            f64::from(self.column) / 10.0,
            u32::from(self.rows),
            u32::from(self.columns),
        )
    }
}

#[derive(Arbitrary, Debug)]
struct CollisionInput {
    a: RawRectangle,
    b: RawRectangle,
}

fuzz_target!(|input: CollisionInput| {
    let a = input.a.build();
    let b = input.b.build();

    // Overlap must not depend on argument order
    let ab = rectangles_overlap(&a, &b);
    let ba = rectangles_overlap(&b, &a);
    assert_eq!(ab, ba, "asymmetric overlap: {a:?} {b:?}");

    // A rectangle always overlaps itself
    assert!(rectangles_overlap(&a, &a), "no self overlap: {a:?}");

    // An overlap implies the rectangles share some row and column range
    if ab {
        let rows_apart = a.row + a.height() <= b.row || b.row + b.height() <= a.row;
        let columns_apart =
            a.column + a.width() <= b.column || b.column + b.width() <= a.column;
        assert!(
            !rows_apart && !columns_apart,
            "overlap reported for separated rectangles: {a:?} {b:?}"
        );
    }
});

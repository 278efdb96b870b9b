//! Tests for the column-major to row-major reshaping.

mod common;

use common::*;

#[test]
fn test_transpose_preserves_every_pixel() {
    let columns = patterned_columns(12, 3);
    let rows = columns.transpose();

    assert_eq!(rows.width, 12);
    assert_eq!(rows.height, 3);
    assert_eq!(rows.as_bytes().len(), columns.data.len());

    for x in 0..12 {
        for y in 0..3 {
            assert_eq!(rows.pixel(x, y), columns.pixel(x, y));
        }
    }
}

#[test]
fn test_rows_are_interleaved_rgb() {
    let rows = patterned_columns(4, 2).transpose();
    let collected: Vec<&[u8]> = rows.rows().collect();

    assert_eq!(collected.len(), 2);
    assert_eq!(collected[1], &[0, 1, 13, 1, 1, 20, 2, 1, 27, 3, 1, 34]);
}

#[test]
fn test_column_slices() {
    let columns = patterned_columns(3, 2);
    assert_eq!(columns.column_len(), 6);
    assert_eq!(columns.column(2), &[2, 0, 14, 2, 1, 27]);
}

#[test]
fn test_grid_converts_to_rgb_image() {
    let rows = patterned_columns(5, 4).transpose();
    let image = rows.to_image().expect("buffer matches dimensions");

    assert_eq!(image.dimensions(), (5, 4));
    assert_eq!(image.get_pixel(3, 2).0, rows.pixel(3, 2));
}

#[test]
fn test_zero_width_grid_has_no_rows() {
    let rows = ColumnMajorGrid::new(0, 3).transpose();
    assert_eq!(rows.rows().count(), 0);
    assert!(rows.as_bytes().is_empty());
}

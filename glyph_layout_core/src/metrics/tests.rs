use super::{FontMetrics, draw_origin, total_dimension, trim_top_to_height, width_per_line};
use crate::geometry::{Dimension, Point, Rect};
use crate::glyph::{GlyphRecord, ShapingScale};
use crate::testing::{clusters, shape, shape_rtl};

const ID: ShapingScale = ShapingScale::IDENTITY;
const FONT: FontMetrics = FontMetrics {
    max_height: 20.0,
    glyph_max_height: 16.0,
};

#[test]
fn one_width_per_line() {
    let glyphs = shape("ab\ncde", 10);
    assert_eq!(width_per_line(&glyphs, ID), [20.0, 30.0]);
    assert_eq!(width_per_line(&glyphs, ShapingScale::new(1.0, 2.0)), [40.0, 60.0]);
}

#[test]
fn trailing_break_opens_an_empty_line() {
    let glyphs = shape("ab\n", 10);
    assert_eq!(width_per_line(&glyphs, ID), [20.0, 0.0]);
    assert_eq!(width_per_line(&[], ID), [0.0]);
}

#[test]
fn total_dimension_is_widest_line_by_line_count() {
    let glyphs = shape("ab\ncde", 10);
    assert_eq!(total_dimension(&glyphs, 20.0, ID, None), Dimension::new(30.0, 40.0));
}

#[test]
fn stop_at_cluster_measures_up_to_the_caret() {
    let glyphs = shape("abc", 10);
    assert_eq!(total_dimension(&glyphs, 0.0, ID, Some(1)).width, 20.0);
}

#[test]
fn stop_inside_ligature_takes_a_share() {
    let glyphs = vec![GlyphRecord::new(1, 30, vec![0, 1, 2])];
    assert_eq!(total_dimension(&glyphs, 0.0, ID, Some(1)).width, 20.0);
}

#[test]
fn stop_on_rtl_glyph_excludes_it() {
    // Visual order: c b a.
    let glyphs = shape_rtl("abc", 10);
    assert_eq!(total_dimension(&glyphs, 0.0, ID, Some(1)).width, 10.0);
}

#[test]
fn stop_continues_through_a_combining_mark() {
    let glyphs = vec![
        GlyphRecord::new(1, 10, vec![0]),
        GlyphRecord::new(2, 4, vec![0]),
        GlyphRecord::new(3, 10, vec![1]),
    ];
    assert_eq!(total_dimension(&glyphs, 0.0, ID, Some(0)).width, 14.0);
}

#[test]
fn origin_without_alignment_is_bounds_corner() {
    let glyphs = shape("abcd", 10);
    let origin = draw_origin(&Rect::new(5, 7, 105, 57), false, false, &glyphs, ID, FONT, None)
        .expect("origin");
    assert_eq!(origin.offset, Point::new(5.0, 7.0));
    assert_eq!(origin.line_height, 20.0);
    assert_eq!(origin.width_per_line, [40.0]);
    assert!(!origin.compressed);
}

#[test]
fn origin_centers_both_ways() {
    let glyphs = shape("abcd", 10);
    let origin = draw_origin(&Rect::new(0, 0, 100, 50), true, true, &glyphs, ID, FONT, None)
        .expect("origin");
    assert_eq!(origin.offset, Point::new(30.0, 15.0));
}

#[test]
fn overflowing_lines_are_squeezed() {
    let glyphs = shape("a\nb\nc", 10);
    let origin = draw_origin(&Rect::new(0, 0, 100, 50), false, true, &glyphs, ID, FONT, None)
        .expect("origin");
    assert!(origin.compressed);
    assert!((origin.line_height - 50.0 / 3.0).abs() < 1e-4);
    // Shifted up by max_height - glyph_max_height instead of centered.
    assert_eq!(origin.offset.y, -4.0);
}

#[test]
fn single_line_is_never_squeezed() {
    let glyphs = shape("abc", 10);
    let origin = draw_origin(&Rect::new(0, 0, 100, 10), false, false, &glyphs, ID, FONT, None)
        .expect("origin");
    assert!(!origin.compressed);
    assert_eq!(origin.line_height, 20.0);
}

#[test]
fn nothing_to_draw() {
    let bounds = Rect::new(0, 0, 100, 50);
    assert!(draw_origin(&bounds, false, false, &[], ID, FONT, None).is_none());

    let glyphs = shape("abc", 10);
    let far = Rect::new(200, 200, 300, 300);
    assert!(draw_origin(&bounds, false, false, &glyphs, ID, FONT, Some(&far)).is_none());
    let near = Rect::new(0, 0, 15, 15);
    assert!(draw_origin(&bounds, false, false, &glyphs, ID, FONT, Some(&near)).is_some());
}

#[test]
fn trim_drops_oldest_lines() {
    let mut glyphs = shape("a\nb\nc\nd", 10);
    trim_top_to_height(&mut glyphs, 10.0, 25.0);
    assert_eq!(clusters(&glyphs), [4, -1, 6]);
}

#[test]
fn trim_is_a_no_op_when_text_fits_or_budget_is_tiny() {
    let original = shape("a\nb\nc\nd", 10);

    let mut glyphs = original.clone();
    trim_top_to_height(&mut glyphs, 10.0, 40.0);
    assert_eq!(glyphs, original);

    trim_top_to_height(&mut glyphs, 10.0, 15.0);
    assert_eq!(glyphs, original);
}

#[test]
fn measurements_use_truncated_scaled_widths() {
    // 15 * 0.5 truncates to 7, then * 2.
    let scale = ShapingScale::new(0.5, 2.0);
    let glyphs = shape("ab\nc", 15);
    assert_eq!(width_per_line(&glyphs, scale), [28.0, 14.0]);
    assert_eq!(total_dimension(&glyphs, 20.0, scale, None), Dimension::new(28.0, 40.0));
    assert_eq!(total_dimension(&glyphs, 20.0, scale, Some(0)).width, 14.0);
}

use super::{GlyphHit, cluster_from_pixel, glyph_at_point, pixel_offset_for_cluster, visual_line};
use crate::glyph::{GlyphRecord, ShapingScale, SourceText};
use crate::testing::{clusters, shape, shape_rtl};

const ID: ShapingScale = ShapingScale::IDENTITY;

fn ffi() -> Vec<GlyphRecord> {
    let source = SourceText::new("0123456789ffi");
    vec![GlyphRecord::new(1, 30, vec![10, 11, 12]).with_source(source)]
}

#[test]
fn ligature_click_picks_the_member_under_the_pointer() {
    let glyphs = ffi();
    assert_eq!(cluster_from_pixel(20.0, &glyphs, ID), 11);
    assert_eq!(cluster_from_pixel(5.0, &glyphs, ID), 10);
    assert_eq!(cluster_from_pixel(25.0, &glyphs, ID), 12);
}

#[test]
fn ltr_click_snaps_to_nearest_edge() {
    let glyphs = shape("abc", 10);
    assert_eq!(cluster_from_pixel(3.0, &glyphs, ID), 0);
    assert_eq!(cluster_from_pixel(7.0, &glyphs, ID), 1);
    assert_eq!(cluster_from_pixel(14.0, &glyphs, ID), 1);
    assert_eq!(cluster_from_pixel(16.0, &glyphs, ID), 2);
}

#[test]
fn click_past_the_end() {
    assert_eq!(cluster_from_pixel(100.0, &shape("abc", 10), ID), 3);
    assert_eq!(cluster_from_pixel(100.0, &shape_rtl("abc", 10), ID), 0);
    assert_eq!(cluster_from_pixel(100.0, &[], ID), 0);
}

#[test]
fn rtl_click_uses_far_side() {
    // Visual order: c b a.
    let glyphs = shape_rtl("abc", 10);
    assert_eq!(cluster_from_pixel(3.0, &glyphs, ID), 3);
    assert_eq!(cluster_from_pixel(12.0, &glyphs, ID), 2);
}

#[test]
fn click_stops_at_line_break() {
    let glyphs = shape("ab\ncd", 10);
    assert_eq!(cluster_from_pixel(100.0, &glyphs, ID), 2);
    assert_eq!(cluster_from_pixel(100.0, visual_line(&glyphs, 1), ID), 5);
    assert_eq!(cluster_from_pixel(7.0, visual_line(&glyphs, 1), ID), 4);
}

#[test]
fn caret_after_cluster_round_trips() {
    let glyphs = shape("hello", 10);
    for i in 0..5 {
        let x = pixel_offset_for_cluster(&glyphs, i, ID);
        assert_eq!(cluster_from_pixel(x, &glyphs, ID), i + 1, "cluster {i}");
    }
}

#[test]
fn ligature_round_trip_lands_within_the_group() {
    let glyphs = ffi();
    for i in 10..13 {
        let x = pixel_offset_for_cluster(&glyphs, i, ID);
        // 13 is the caret right after the ligature.
        assert!((10..=13).contains(&cluster_from_pixel(x, &glyphs, ID)), "cluster {i}");
    }
}

#[test]
fn visual_line_excludes_break_glyphs() {
    let glyphs = shape("ab\ncd", 10);
    assert_eq!(clusters(visual_line(&glyphs, 0)), [0, 1]);
    assert_eq!(clusters(visual_line(&glyphs, 1)), [3, 4]);
    assert!(visual_line(&glyphs, 5).is_empty());
}

#[test]
fn hit_test_finds_glyph_on_each_line() {
    let glyphs = shape("ab\ncd", 10);
    let hit = |x, y| glyph_at_point(x, y, &glyphs, 100.0, 100.0, 20.0, ID);
    assert_eq!(
        hit(15.0, 5.0),
        Some(GlyphHit {
            glyph_index: 1,
            cluster: 1
        })
    );
    assert_eq!(
        hit(5.0, 25.0),
        Some(GlyphHit {
            glyph_index: 3,
            cluster: 3
        })
    );
    assert_eq!(hit(50.0, 5.0), None);
    assert_eq!(hit(-1.0, 5.0), None);
}

#[test]
fn hit_test_right_aligns_rtl_lines() {
    let glyphs = shape_rtl("ab", 10);
    let hit = |x| glyph_at_point(x, 5.0, &glyphs, 100.0, 100.0, 20.0, ID);
    assert_eq!(hit(85.0).map(|h| h.cluster), Some(1));
    assert_eq!(hit(95.0).map(|h| h.cluster), Some(0));
    assert_eq!(hit(5.0), None);
}

#[test]
fn hit_test_follows_squeezed_lines() {
    let glyphs = shape("a\nb\nc", 10);
    let hit = glyph_at_point(5.0, 15.0, &glyphs, 100.0, 30.0, 20.0, ID);
    assert_eq!(hit.map(|h| h.cluster), Some(2));
}

#[test]
fn hit_test_skips_glyphs_without_source() {
    let glyphs = vec![GlyphRecord::new(1, 10, vec![0])];
    assert_eq!(glyph_at_point(5.0, 5.0, &glyphs, 100.0, 100.0, 20.0, ID), None);
}

// 15 units * 0.5 = 7.5, truncated to 7, then * 2: every glyph is 14px wide.
const HALF_DOUBLE: ShapingScale = ShapingScale {
    inverse_shaping: 0.5,
    scale: 2.0,
};

#[test]
fn click_uses_scaled_widths() {
    let glyphs = shape("abc", 15);
    assert_eq!(cluster_from_pixel(21.5, &glyphs, HALF_DOUBLE), 2);
    assert_eq!(cluster_from_pixel(100.0, &glyphs, HALF_DOUBLE), 3);
}

#[test]
fn caret_offset_uses_scaled_widths() {
    let glyphs = shape("abc", 15);
    assert_eq!(pixel_offset_for_cluster(&glyphs, 0, HALF_DOUBLE), 14.0);
    assert_eq!(pixel_offset_for_cluster(&glyphs, 1, HALF_DOUBLE), 28.0);
}

#[test]
fn hit_test_uses_scaled_widths() {
    let glyphs = shape("abc", 15);
    let hit = |x| glyph_at_point(x, 5.0, &glyphs, 100.0, 100.0, 20.0, HALF_DOUBLE);
    assert_eq!(hit(29.0).map(|h| h.cluster), Some(2));
    assert_eq!(hit(43.0), None);
}

#[test]
fn hit_test_rejects_cluster_past_source_end() {
    let glyphs = vec![GlyphRecord::new(1, 10, vec![3]).with_source(SourceText::new("abc"))];
    assert_eq!(glyph_at_point(5.0, 5.0, &glyphs, 100.0, 100.0, 20.0, ID), None);
}

//! Mapping between pixel positions and logical character positions.
//!
//! `cluster_from_pixel` answers "where does a click at x put the caret" for a
//! single visual line. `pixel_offset_for_cluster` is the inverse: the x of a
//! caret placed after a cluster. `glyph_at_point` hit-tests multi-line,
//! possibly right-aligned text for click handling (links, copy on click).

use crate::geometry::Dimension;
use crate::glyph::{GlyphFlags, GlyphRecord, ShapingScale};
use crate::metrics::{total_dimension, width_per_line};

/// Glyph under a point, with the first source codepoint it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphHit {
    /// Index into the glyph sequence that was hit-tested.
    pub glyph_index: usize,
    pub cluster: i32,
}

/// Caret position (cluster index) nearest to `x` on a single visual line.
///
/// Scanning stops at the first line break, so callers pass one line, see
/// [`visual_line`]. The left half of a leading LTR glyph maps to 0, the
/// start of the text. Past the end of the content the caret goes to the
/// logical end of LTR text, or the logical start of RTL text.
pub fn cluster_from_pixel(x: f32, glyphs: &[GlyphRecord], scale: ShapingScale) -> i32 {
    let mut total_width = 0.0;
    let mut last: Option<&GlyphRecord> = None;

    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.is_newline() {
            break;
        }
        let Some(first) = glyph.first_cluster() else {
            continue;
        };
        let width = scale.glyph_width(glyph);
        if glyph.cluster.len() == 1 {
            if glyph.is_rtl() {
                // The caret of an RTL glyph is drawn on its far side, so the
                // threshold sits one glyph further.
                if i == 0 && width * 0.5 > x {
                    return first + 1;
                }
                if total_width + width * 1.5 > x {
                    return first;
                }
            } else {
                if i == 0 && width * 0.5 > x {
                    return 0;
                }
                if total_width + width * 0.5 > x {
                    return first;
                }
            }
        } else if total_width + width > x {
            return ligature_member_at(x - total_width, glyph, width);
        }
        total_width += width;
        last = Some(glyph);
    }

    match last {
        Some(glyph) if glyph.is_rtl() => 0,
        Some(glyph) => glyph.last_cluster().map_or(0, |c| c + 1),
        None => 0,
    }
}

/// Member of a ligature `glyph` whose even share of `width` holds
/// `remaining` pixels. A share boundary belongs to the share on its left.
fn ligature_member_at(remaining: f32, glyph: &GlyphRecord, width: f32) -> i32 {
    let share = width / glyph.cluster.len() as f32;
    let mut right_edge = 0.0;
    for &member in &glyph.cluster {
        right_edge += share;
        if remaining <= right_edge {
            return member;
        }
    }
    // Rounding left `remaining` past the last share.
    glyph.cluster.last().copied().unwrap_or_default()
}

/// X offset of a caret placed right after `cluster`.
pub fn pixel_offset_for_cluster(glyphs: &[GlyphRecord], cluster: i32, scale: ShapingScale) -> f32 {
    let Dimension { width, .. } = total_dimension(glyphs, 0.0, scale, Some(cluster));
    width
}

/// Glyphs of visual line `line` (0-based), without its line break glyph.
///
/// Lines past the end yield an empty slice.
pub fn visual_line(glyphs: &[GlyphRecord], line: usize) -> &[GlyphRecord] {
    glyphs
        .split(GlyphRecord::is_newline)
        .nth(line)
        .unwrap_or_default()
}

/// Glyph under `(x, y)` in text laid out in a `bounds_width` x `bounds_height`
/// box, relative to the box origin.
///
/// Lines flagged `RTL_LINE` are right-aligned. The line height is squeezed
/// the same way [`crate::metrics::draw_origin`] does when lines overflow.
/// Only glyphs with a source string and a cluster inside it are reported.
pub fn glyph_at_point(
    x: f32,
    y: f32,
    glyphs: &[GlyphRecord],
    bounds_width: f32,
    bounds_height: f32,
    height_per_line: f32,
    scale: ShapingScale,
) -> Option<GlyphHit> {
    if x < 0.0 || y < 0.0 || glyphs.is_empty() {
        return None;
    }
    let widths = width_per_line(glyphs, scale);
    let mut line_height = height_per_line;
    if widths.len() > 1 && widths.len() as f32 * line_height > bounds_height {
        line_height = bounds_height / widths.len() as f32;
    }
    let line_height = line_height.trunc();

    let mut line = 0;
    let mut top = 0.0;
    let mut left = line_start(glyphs.first(), &widths, 0, bounds_width);
    let mut line_changed = false;
    let mut hit = None;
    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.is_newline() {
            top += line_height;
            line += 1;
            line_changed = true;
            continue;
        }
        if line_changed {
            line_changed = false;
            left = line_start(Some(glyph), &widths, line, bounds_width);
        }
        let right = left + scale.glyph_width(glyph).trunc();
        if x >= left && x <= right && y >= top && y <= top + line_height {
            hit = Some(i);
            break;
        }
        left = right;
    }

    let glyph_index = hit?;
    let glyph = &glyphs[glyph_index];
    let cluster = glyph.first_cluster()?;
    let len = glyph.source.as_ref()?.len();
    if usize::try_from(cluster).ok()? >= len {
        return None;
    }
    Some(GlyphHit {
        glyph_index,
        cluster,
    })
}

/// Left edge of `line` starting with `first`: right-aligned for RTL lines.
fn line_start(first: Option<&GlyphRecord>, widths: &[f32], line: usize, bounds_width: f32) -> f32 {
    let rtl = first.is_some_and(|g| g.flags.contains(GlyphFlags::RTL_LINE));
    match widths.get(line) {
        Some(&width) if rtl => (bounds_width - width).trunc(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests;

//! Width-based line breaking over shaped glyphs.
//!
//! The flat glyph sequence of a paragraph is split at source line breaks into
//! hard segments. A segment wider than the budget is sorted into logical
//! (cluster) order, scanned left to right, and cut after the nearest
//! `BREAKABLE` glyph, or force-cut when a run has no break opportunity.
//! Each produced line is then sorted back into shaping (visual) order.
//!
//! Breaking is idempotent: synthetic breaks from a previous run are stripped
//! before anything else, so re-breaking flattened output at the same width
//! gives the same lines.

use crate::glyph::{GlyphFlags, GlyphRecord, ShapingScale};

/// Break `glyphs` into visual lines no wider than `max_line_width` pixels.
///
/// Lines carry no line break glyphs except a source line break as their last
/// element. A line wider than the budget holds exactly one oversized glyph.
pub fn break_lines(
    glyphs: &[GlyphRecord],
    max_line_width: f32,
    scale: ShapingScale,
) -> Vec<Vec<GlyphRecord>> {
    let mut lines: Vec<Vec<GlyphRecord>> = Vec::new();
    let mut segment: Vec<GlyphRecord> = Vec::new();

    for glyph in glyphs.iter().filter(|g| !g.is_synthetic_newline()) {
        if glyph.is_newline() {
            let first_new = lines.len();
            break_segment(std::mem::take(&mut segment), max_line_width, scale, &mut lines);
            if lines.len() == first_new {
                lines.push(Vec::new());
            }
            if let Some(last) = lines.last_mut() {
                last.push(glyph.clone());
            }
        } else {
            segment.push(glyph.clone());
        }
    }
    break_segment(segment, max_line_width, scale, &mut lines);

    log::debug!(
        "broke {} glyphs into {} lines at {max_line_width}px",
        glyphs.len(),
        lines.len()
    );
    lines
}

/// Join lines back into one sequence, separating them with synthetic breaks.
///
/// No separator follows a line that already ends in a source line break, so
/// consecutive blank lines are never doubled.
pub fn flatten_lines(lines: Vec<Vec<GlyphRecord>>) -> Vec<GlyphRecord> {
    let count = lines.len();
    let mut out = Vec::with_capacity(lines.iter().map(Vec::len).sum::<usize>() + count);
    for (i, line) in lines.into_iter().enumerate() {
        let ends_with_break = line.last().is_some_and(GlyphRecord::is_newline);
        out.extend(line);
        if i + 1 < count && !ends_with_break {
            out.push(GlyphRecord::synthetic_newline());
        }
    }
    out
}

/// Break `glyphs` in place, the flat counterpart of [`break_lines`].
pub fn break_glyphs(glyphs: &mut Vec<GlyphRecord>, max_line_width: f32, scale: ShapingScale) {
    if glyphs.is_empty() {
        return;
    }
    let lines = break_lines(glyphs, max_line_width, scale);
    *glyphs = flatten_lines(lines);
}

/// Break one hard segment (no line break glyphs inside) and append its lines.
fn break_segment(
    mut segment: Vec<GlyphRecord>,
    max_line_width: f32,
    scale: ShapingScale,
    out: &mut Vec<Vec<GlyphRecord>>,
) {
    if segment.is_empty() {
        return;
    }
    let total: f32 = segment.iter().map(|g| scale.glyph_width(g)).sum();
    if total <= max_line_width {
        out.push(into_visual_order(segment));
        return;
    }

    // Walk the text in reading order, not shaping order.
    segment.sort_by_key(|g| (g.first_cluster().unwrap_or(i32::MAX), g.original_index));

    let mut start = 0;
    let mut end = 0;
    let mut line_width = 0.0;
    while end < segment.len() {
        let width = scale.glyph_width(&segment[end]);
        if width > max_line_width {
            if start < end {
                out.push(into_visual_order(segment[start..end].to_vec()));
            }
            log::trace!("glyph {end} is wider than the line ({width}px), placed alone");
            out.push(vec![segment[end].clone()]);
            end += 1;
            start = end;
            line_width = 0.0;
        } else if line_width + width <= max_line_width {
            line_width += width;
            end += 1;
        } else {
            let cut = find_break(&segment, start, end).unwrap_or_else(|| {
                log::trace!("no break opportunity in glyphs {start}..{end}, forcing a cut");
                forced_cut(&segment, start, end)
            });
            out.push(into_visual_order(segment[start..cut].to_vec()));
            // Rescan from the new line start; `cut > start` guarantees progress.
            start = cut;
            end = cut;
            line_width = 0.0;
        }
    }
    if start < segment.len() {
        out.push(into_visual_order(segment[start..].to_vec()));
    }
}

/// End (exclusive) of the line `start..end` when cut after the nearest
/// breakable glyph. The line's first glyph is not considered, and a cut never
/// separates glyphs of one ligature.
fn find_break(segment: &[GlyphRecord], start: usize, end: usize) -> Option<usize> {
    (start + 1..end)
        .rev()
        .find(|&i| {
            segment[i].flags.contains(GlyphFlags::BREAKABLE)
                && !segment[i].same_cluster(&segment[i + 1])
        })
        .map(|i| i + 1)
}

/// End (exclusive) of the line `start..end` when no break opportunity exists.
///
/// Backs off to the start of a ligature straddling `end`; when the whole line
/// is one ligature the cut lands at `end` anyway.
fn forced_cut(segment: &[GlyphRecord], start: usize, end: usize) -> usize {
    let mut cut = end;
    while cut > start + 1 && segment[cut].same_cluster(&segment[cut - 1]) {
        cut -= 1;
    }
    if cut == start + 1 && segment[cut].same_cluster(&segment[start]) {
        end
    } else {
        cut
    }
}

fn into_visual_order(mut line: Vec<GlyphRecord>) -> Vec<GlyphRecord> {
    line.sort_by_key(|g| g.original_index);
    line
}

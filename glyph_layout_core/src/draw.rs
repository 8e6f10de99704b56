//! Paint state and glyph positioning for renderers.
//!
//! Draw state is a two-phase affair: a widget marks the selection or IME
//! composition with [`mark_draw_state`], positions the glyphs, and resets
//! everything with [`clear_draw_state`] once the frame is drawn.

use std::ops::Range;

use crate::geometry::{Point, Rect};
use crate::glyph::{DrawFlags, FaceIdx, GlyphFlags, GlyphRecord, ShapingScale};
use crate::metrics::{self, FontMetrics};

/// A glyph at its final pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Index of the source glyph in the positioned sequence.
    pub source_index: usize,
    pub glyph_index: u32,
    pub face_idx: FaceIdx,
    pub position: Point,
    pub flags: GlyphFlags,
}

/// Background or underline slice for one marked codepoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSpan {
    pub x0: f32,
    pub x1: f32,
    /// Top of the line the slice belongs to.
    pub y: f32,
}

/// Everything a renderer needs for one draw call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    pub glyphs: Vec<PositionedGlyph>,
    pub highlights: Vec<HighlightSpan>,
    /// Style of every highlight in this pass: the first marked codepoint
    /// decides, selection winning over composition within one codepoint.
    pub highlight_kind: DrawFlags,
    pub line_height: f32,
}

/// OR `kind` into the draw state of every codepoint in `clusters`.
///
/// Returns how many codepoint slots were marked.
pub fn mark_draw_state(glyphs: &mut [GlyphRecord], clusters: Range<i32>, kind: DrawFlags) -> usize {
    let mut marked = 0;
    for glyph in glyphs.iter_mut() {
        debug_assert_eq!(glyph.cluster.len(), glyph.draw_flags.len());
        for (cluster, flags) in glyph.cluster.iter().zip(glyph.draw_flags.iter_mut()) {
            if clusters.contains(cluster) {
                *flags |= kind;
                marked += 1;
            }
        }
    }
    marked
}

/// Reset all draw state. Returns how many slots had been marked.
pub fn clear_draw_state(glyphs: &mut [GlyphRecord]) -> usize {
    let mut cleared = 0;
    for flags in glyphs.iter_mut().flat_map(|g| g.draw_flags.iter_mut()) {
        if !flags.is_empty() {
            *flags = DrawFlags::empty();
            cleared += 1;
        }
    }
    cleared
}

/// Position every visible glyph of `glyphs` inside `bounds`.
///
/// Each line starts at the bounds' left edge, then is centered when
/// `h_center` is set, or right-aligned when its first glyph is flagged
/// `RTL_LINE`. Returns `None` when [`metrics::draw_origin`] finds nothing to
/// draw.
pub fn position_glyphs(
    glyphs: &[GlyphRecord],
    bounds: &Rect,
    h_center: bool,
    v_center: bool,
    scale: ShapingScale,
    font: FontMetrics,
    clip: Option<&Rect>,
) -> Option<DrawList> {
    let origin = metrics::draw_origin(bounds, h_center, v_center, glyphs, scale, font, clip)?;
    let widths = &origin.width_per_line;
    let bounds_width = bounds.width() as f32;
    let mut pen = origin.offset;
    let mut list = DrawList {
        line_height: origin.line_height,
        ..DrawList::default()
    };

    if !h_center && glyphs[0].flags.contains(GlyphFlags::RTL_LINE) {
        pen.x += (bounds_width - widths[0]).trunc();
    }

    let mut line = 0;
    let mut line_changed = false;
    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.is_newline() {
            pen.x = bounds.x0 as f32;
            pen.y += origin.line_height.trunc();
            line += 1;
            line_changed = true;
            continue;
        }
        if line_changed {
            line_changed = false;
            let width = widths.get(line).copied().unwrap_or_default();
            if h_center {
                pen.x += ((bounds_width - width) / 2.0).trunc();
            } else if glyph.flags.contains(GlyphFlags::RTL_LINE) {
                pen.x += (bounds_width - width).trunc();
            }
        }

        list.glyphs.push(PositionedGlyph {
            source_index: i,
            glyph_index: glyph.glyph_index,
            face_idx: glyph.face_idx,
            position: Point::new(
                pen.x + scale.width(glyph.x_offset),
                pen.y - scale.width(glyph.y_offset),
            ),
            flags: glyph.flags,
        });

        let advance = if glyph.flags.contains(GlyphFlags::QUICK_DRAW) {
            glyph.x_advance as f32 * scale.scale
        } else {
            scale.width(glyph.x_advance)
        };
        collect_highlights(glyph, pen, advance, &mut list);
        pen.x += advance;
    }
    Some(list)
}

/// Split `advance` evenly over the glyph's codepoints and emit a slice for
/// each marked one.
fn collect_highlights(glyph: &GlyphRecord, pen: Point, advance: f32, list: &mut DrawList) {
    if glyph.draw_flags.is_empty() {
        return;
    }
    let share = advance / glyph.draw_flags.len() as f32;
    let mut x = pen.x;
    for &flags in &glyph.draw_flags {
        if !flags.is_empty() {
            if list.highlight_kind.is_empty() {
                list.highlight_kind = if flags.contains(DrawFlags::MARKED) {
                    DrawFlags::MARKED
                } else {
                    DrawFlags::COMPOSING
                };
            }
            list.highlights.push(HighlightSpan {
                x0: x,
                x1: x + share,
                y: pen.y,
            });
        }
        x += share;
    }
}

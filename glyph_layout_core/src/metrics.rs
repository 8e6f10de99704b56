//! Line geometry: per-line widths, text extent, and the draw origin used by
//! renderers for alignment and clipping.

use crate::geometry::{Dimension, Point, Rect};
use crate::glyph::{GlyphRecord, ShapingScale};

/// Vertical font metrics, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    /// Line height of the font.
    pub max_height: f32,
    /// Tallest glyph actually present in the font's atlas.
    pub glyph_max_height: f32,
}

/// Where and how to start drawing a glyph sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOrigin {
    /// Pen position of the first glyph of the first line.
    pub offset: Point,
    /// Distance between consecutive baselines.
    pub line_height: f32,
    pub width_per_line: Vec<f32>,
    /// Lines were squeezed because they did not fit the bounds height.
    pub compressed: bool,
}

/// Width of every line, split at both source and synthetic line breaks.
///
/// Always returns `line breaks + 1` entries.
pub fn width_per_line(glyphs: &[GlyphRecord], scale: ShapingScale) -> Vec<f32> {
    let mut widths = Vec::new();
    let mut current = 0.0;
    for glyph in glyphs {
        if glyph.is_newline() {
            widths.push(current);
            current = 0.0;
            continue;
        }
        current += scale.glyph_width(glyph);
    }
    widths.push(current);
    widths
}

/// Extent of `glyphs`: widest line by `height_per_line * lines`.
///
/// With `stop_at_cluster`, accumulation ends at the glyph containing that
/// cluster, giving the x offset of a cursor placed after it. Inside a
/// ligature the glyph contributes `advance * (position + 1) / cluster_len`;
/// an RTL glyph contributes nothing, the cursor sits at its start.
pub fn total_dimension(
    glyphs: &[GlyphRecord],
    height_per_line: f32,
    scale: ShapingScale,
    stop_at_cluster: Option<i32>,
) -> Dimension {
    let mut dim = Dimension::default();
    let mut line_width = 0.0_f32;

    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.is_newline() {
            dim.height += height_per_line;
            dim.width = dim.width.max(line_width);
            line_width = 0.0;
            continue;
        }
        let mut width = scale.glyph_width(glyph);
        let mut found = false;
        if let Some(cluster) = stop_at_cluster {
            if let Some(pos) = glyph.cluster_position(cluster) {
                // A following glyph of the same cluster (combining mark,
                // split ligature) still belongs in front of the cursor.
                let continues = glyphs
                    .get(i + 1)
                    .is_some_and(|next| next.first_cluster() == Some(cluster));
                if !continues {
                    found = true;
                    if glyph.is_rtl() {
                        width = 0.0;
                    } else {
                        width *= (pos + 1) as f32 / glyph.cluster.len() as f32;
                    }
                }
            }
        }
        line_width += width;
        if found {
            break;
        }
    }

    dim.height += height_per_line;
    dim.width = dim.width.max(line_width);
    dim
}

/// Pen origin, line height and per-line widths for drawing `glyphs` in
/// `bounds`. Returns `None` when there is nothing to draw, either no glyphs or
/// text fully clipped away.
///
/// When several lines overflow the bounds height the line height is squeezed
/// to `bounds.height / lines`, and vertical centering becomes a shift up by
/// `(max_height - glyph_max_height) * scale` instead of true centering.
pub fn draw_origin(
    bounds: &Rect,
    h_center: bool,
    v_center: bool,
    glyphs: &[GlyphRecord],
    scale: ShapingScale,
    font: FontMetrics,
    clip: Option<&Rect>,
) -> Option<DrawOrigin> {
    if glyphs.is_empty() {
        log::debug!("draw origin: no glyphs");
        return None;
    }
    let widths = width_per_line(glyphs, scale);
    let first_width = *widths.first()?;

    let mut offset = Point::new(bounds.x0 as f32, bounds.y0 as f32);
    let mut line_height = font.max_height * scale.scale;
    let bounds_height = bounds.height() as f32;
    let compressed = widths.len() > 1 && widths.len() as f32 * line_height > bounds_height;
    if compressed {
        line_height = bounds_height / widths.len() as f32;
    }

    if h_center || v_center || clip.is_some() {
        let dim = total_dimension(glyphs, line_height, scale, None);
        let (text_width, text_height) = dim.to_pixels();

        if h_center {
            offset.x += ((bounds.width() as f32 - first_width) / 2.0).trunc();
        }
        if v_center {
            if compressed {
                offset.y -= ((font.max_height - font.glyph_max_height) * scale.scale).trunc();
            } else {
                offset.y += ((bounds_height - text_height as f32) / 2.0).trunc();
            }
        }
        if let Some(clip) = clip {
            let text_rect = Rect::from_origin(
                offset.x as i32,
                offset.y as i32,
                text_width as i32,
                text_height as i32,
            );
            if text_rect.clipped(clip).is_empty() {
                log::debug!("draw origin: text {text_rect:?} clipped away by {clip:?}");
                return None;
            }
        }
    }

    Some(DrawOrigin {
        offset,
        line_height,
        width_per_line: widths,
        compressed,
    })
}

/// Drop the oldest lines so the text fits `max_height`.
///
/// Does nothing when fewer than two lines fit. Otherwise removes whole lines
/// from the top (through their line break glyph) until the remaining
/// `height_per_line * lines` no longer exceeds `max_height`.
pub fn trim_top_to_height(glyphs: &mut Vec<GlyphRecord>, height_per_line: f32, max_height: f32) {
    if height_per_line <= 0.0 || max_height < height_per_line * 2.0 {
        return;
    }
    let breaks: Vec<usize> = glyphs
        .iter()
        .enumerate()
        .filter(|(_, g)| g.is_newline())
        .map(|(i, _)| i)
        .collect();

    let total_height = height_per_line * (breaks.len() + 1) as f32;
    if total_height <= max_height {
        return;
    }
    let excess_lines = ((total_height - max_height) / height_per_line) as usize;
    if let Some(&last_removed) = breaks.get(excess_lines) {
        if last_removed + 1 < glyphs.len() {
            log::debug!("trimming {} lines above {max_height}px", excess_lines + 1);
            glyphs.drain(..=last_removed);
        }
    }
}

#[cfg(test)]
mod tests;

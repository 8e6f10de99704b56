//! Glyph sequence builders shared by unit tests.

use crate::glyph::{GlyphFlags, GlyphRecord, SourceText};
use crate::kinsoku::breakable_after;

/// One glyph per character with a fixed advance; `\n` becomes a line break.
pub(crate) fn shape(text: &str, advance: i32) -> Vec<GlyphRecord> {
    let source = SourceText::new(text);
    let mut glyphs = Vec::new();
    for (i, &c) in source.iter().enumerate() {
        let mut glyph = if c == '\n' {
            GlyphRecord::newline()
        } else {
            GlyphRecord::new(c as u32, advance, vec![i as i32]).with_source(source.clone())
        };
        if breakable_after(&source, i) {
            glyph.flags |= GlyphFlags::BREAKABLE;
        }
        glyph.original_index = glyphs.len() as u32;
        glyphs.push(glyph);
    }
    glyphs
}

/// A right-to-left line: glyphs in visual order (last character first),
/// `original_index` following that visual order.
pub(crate) fn shape_rtl(text: &str, advance: i32) -> Vec<GlyphRecord> {
    let mut glyphs = shape(text, advance);
    glyphs.reverse();
    for (i, glyph) in glyphs.iter_mut().enumerate() {
        glyph.flags |= GlyphFlags::RTL_CHAR | GlyphFlags::RTL_LINE;
        glyph.original_index = i as u32;
    }
    glyphs
}

/// Clusters of every glyph, line breaks as `-1`.
pub(crate) fn clusters(glyphs: &[GlyphRecord]) -> Vec<i32> {
    glyphs
        .iter()
        .map(|g| if g.is_newline() { -1 } else { g.cluster[0] })
        .collect()
}

//! Unshaped layout on a fixed cell grid.

use glyph_layout_core::glyph::{GlyphFlags, GlyphRecord, SourceText};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{Shaper, is_strong_rtl, shape_paragraphs};

/// One glyph per grapheme cluster, `columns * cell_advance` pixels wide.
///
/// Glyphs are flagged `QUICK_DRAW`: advances are pixels and the glyph index
/// is the grapheme's first codepoint. A paragraph containing any
/// right-to-left character is laid out right-to-left as a whole.
#[derive(Debug, Clone)]
pub struct QuickShaper {
    cell_advance: i32,
}

impl QuickShaper {
    pub fn new(cell_advance: i32) -> Self {
        Self {
            cell_advance: cell_advance.max(1),
        }
    }

    pub fn cell_advance(&self) -> i32 {
        self.cell_advance
    }

    /// Change the cell width. Previously shaped glyphs become stale.
    pub fn set_cell_advance(&mut self, cell_advance: i32) {
        self.cell_advance = cell_advance.max(1);
    }
}

impl Shaper for QuickShaper {
    fn shape(&mut self, text: &str) -> Vec<GlyphRecord> {
        let source = SourceText::new(text);
        let cell_advance = self.cell_advance;
        shape_paragraphs(&source, |range| {
            let paragraph: String = source[range.clone()].iter().collect();
            let mut glyphs = Vec::new();
            let mut index = range.start;
            let mut rtl = false;
            for grapheme in paragraph.graphemes(true) {
                let count = grapheme.chars().count();
                rtl |= grapheme.chars().any(is_strong_rtl);
                let columns = grapheme.width() as i32;
                let cluster = (index..index + count).map(|i| i as i32).collect();
                let glyph_index = grapheme.chars().next().map_or(0, |c| c as u32);
                glyphs.push(
                    GlyphRecord::new(glyph_index, columns * cell_advance, cluster)
                        .with_flags(GlyphFlags::QUICK_DRAW),
                );
                index += count;
            }
            if rtl {
                glyphs.reverse();
                for glyph in &mut glyphs {
                    glyph.flags |= GlyphFlags::RTL_LINE | GlyphFlags::RTL_CHAR;
                }
            }
            glyphs
        })
    }

    fn font_id(&self) -> u64 {
        self.cell_advance as u64
    }

    fn inverse_shaping(&self) -> f32 {
        1.0
    }
}

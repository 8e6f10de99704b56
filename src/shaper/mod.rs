//! Text shaping: turning a string into the glyph records the layout engine
//! works on.
//!
//! Two shapers are provided. [`QuickShaper`] lays text out on a fixed cell
//! grid without a font, one glyph per grapheme. [`OpenTypeShaper`] shapes
//! with `rustybuzz` against a real font, producing ligatures and
//! right-to-left runs.
//!
//! Both split text into paragraphs at `\r\n`, `\r` and `\n`, emit a
//! `NEWLINE` glyph between paragraphs, and finish the sequence the same way:
//! shared source string, `original_index` in output order, and `BREAKABLE`
//! from the kinsoku tables.

mod opentype;
mod quick;

use std::ops::Range;

pub use opentype::{OpenTypeShaper, parse_features};
pub use quick::QuickShaper;

use glyph_layout_core::glyph::{GlyphFlags, GlyphRecord, SourceText};
use glyph_layout_core::kinsoku::breakable_after;

/// Produces glyph records for a string.
pub trait Shaper {
    /// Shape `text` into glyphs in visual order.
    fn shape(&mut self, text: &str) -> Vec<GlyphRecord>;

    /// Identity of the font in use. Glyphs shaped under another id are stale.
    fn font_id(&self) -> u64;

    /// Shaper units to pixels.
    fn inverse_shaping(&self) -> f32;
}

impl<S: Shaper + ?Sized> Shaper for Box<S> {
    fn shape(&mut self, text: &str) -> Vec<GlyphRecord> {
        (**self).shape(text)
    }

    fn font_id(&self) -> u64 {
        (**self).font_id()
    }

    fn inverse_shaping(&self) -> f32 {
        (**self).inverse_shaping()
    }
}

/// Whether `c` belongs to a right-to-left script block (Hebrew, Arabic,
/// Syriac, Thaana, NKo and their presentation forms).
pub fn is_strong_rtl(c: char) -> bool {
    matches!(
        c as u32,
        0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF | 0x10800..=0x10FFF | 0x1E800..=0x1EFFF
    )
}

/// Codepoint ranges of the paragraphs of `text`.
///
/// Every paragraph but the last is followed by one line break (`\r\n`
/// counts as one). An empty text is one empty paragraph.
fn paragraphs(text: &[char]) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < text.len() {
        match text[i] {
            '\r' if text.get(i + 1) == Some(&'\n') => {
                out.push(start..i);
                i += 2;
                start = i;
            }
            '\r' | '\n' => {
                out.push(start..i);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    out.push(start..text.len());
    out
}

/// Shape each paragraph with `shape_paragraph` and join them with line
/// break glyphs, then finish the sequence for the layout engine.
fn shape_paragraphs<F>(source: &SourceText, mut shape_paragraph: F) -> Vec<GlyphRecord>
where
    F: FnMut(Range<usize>) -> Vec<GlyphRecord>,
{
    let mut glyphs = Vec::new();
    for (i, range) in paragraphs(source).into_iter().enumerate() {
        if i > 0 {
            glyphs.push(GlyphRecord::newline());
        }
        glyphs.extend(shape_paragraph(range));
    }

    for (i, glyph) in glyphs.iter_mut().enumerate() {
        glyph.original_index = i as u32;
        if glyph.is_newline() {
            continue;
        }
        let breakable = glyph
            .last_cluster()
            .and_then(|c| usize::try_from(c).ok())
            .is_some_and(|c| breakable_after(source, c));
        if breakable {
            glyph.flags |= GlyphFlags::BREAKABLE;
        }
        glyph.source = Some(source.clone());
    }
    glyphs
}

//! Layout engine for shaped text.
//!
//! Takes the flat glyph sequence a shaper produced for a paragraph and
//! answers layout questions about it: where lines break for a width budget,
//! how wide each line is and where drawing starts, which character a click
//! lands on, and which text a clicked link covers. It contains no shaping,
//! font loading, or rendering code.

#![deny(unsafe_code)]

pub mod breaking;
pub mod cursor;
pub mod draw;
pub mod geometry;
pub mod glyph;
pub mod kinsoku;
pub mod metrics;
pub mod url;

#[cfg(test)]
mod testing;

pub use breaking::{break_glyphs, break_lines, flatten_lines};
pub use cursor::{GlyphHit, cluster_from_pixel, glyph_at_point, pixel_offset_for_cluster, visual_line};
pub use draw::{DrawList, HighlightSpan, PositionedGlyph, clear_draw_state, mark_draw_state, position_glyphs};
pub use geometry::{Dimension, Point, Rect};
pub use glyph::{DrawFlags, FaceIdx, GlyphFlags, GlyphRecord, ShapingScale, SourceText, logical_text};
pub use metrics::{DrawOrigin, FontMetrics, draw_origin, total_dimension, trim_top_to_height, width_per_line};
pub use url::{UrlSpan, extract_url};

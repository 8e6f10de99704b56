//! A text widget model.
//!
//! `TextBox` owns a string and its laid-out glyphs and keeps them in sync
//! with the shaper: a font change (new `font_id`) reshapes on the next query,
//! a width change only re-breaks the existing glyphs. Selection and IME
//! composition are marked just before drawing and cleared right after.

use std::ops::Range;

use glyph_layout_core::breaking::break_glyphs;
use glyph_layout_core::cursor::{
    cluster_from_pixel, glyph_at_point, pixel_offset_for_cluster, visual_line,
};
use glyph_layout_core::draw::{DrawList, clear_draw_state, mark_draw_state, position_glyphs};
use glyph_layout_core::geometry::{Dimension, Rect};
use glyph_layout_core::glyph::{DrawFlags, GlyphFlags, GlyphRecord, ShapingScale};
use glyph_layout_core::metrics::{total_dimension, trim_top_to_height};
use glyph_layout_core::url::extract_url;

use crate::config::Config;
use crate::shaper::Shaper;
use crate::url_detect::mark_urls;

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// A detected link, with the codepoint index it starts at.
    Url { url: String, start: i32 },
    /// Plain text; `cluster` is the first codepoint of the clicked glyph.
    Text { cluster: i32 },
}

pub struct TextBox<S> {
    config: Config,
    shaper: S,
    text: String,
    glyphs: Vec<GlyphRecord>,
    max_line_width: f32,
    /// Set by the owner; otherwise the box is as tall as its text.
    bounds: Option<Rect>,
    /// Font id the glyphs were shaped with, `None` before the first layout.
    shaped_with: Option<u64>,
}

impl<S: Shaper> TextBox<S> {
    pub fn new(config: Config, shaper: S) -> Self {
        let max_line_width = config.layout.effective_max_line_width();
        Self {
            config,
            shaper,
            text: String::new(),
            glyphs: Vec::new(),
            max_line_width,
            bounds: None,
            shaped_with: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the shaper, e.g. to change the font size. Layout catches up on
    /// the next query.
    pub fn shaper_mut(&mut self) -> &mut S {
        &mut self.shaper
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    /// Append `line` as a new paragraph, dropping the oldest lines when the
    /// text outgrows `layout.max_height`.
    ///
    /// Paragraphs that scrolled off entirely are removed from the text too,
    /// so a log fed line by line stays as long as what is visible.
    pub fn append_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.relayout();
        self.drop_scrolled_text();
    }

    /// Change the line width budget. Laid-out glyphs are re-broken in place.
    pub fn set_width(&mut self, width: f32) {
        self.max_line_width = width.max(1.0);
        if !self.is_stale() {
            self.wrap();
        }
    }

    /// Place the box. Its width becomes the line width budget.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        self.set_width(bounds.width() as f32);
    }

    pub fn glyphs(&mut self) -> &[GlyphRecord] {
        self.ensure_layout();
        &self.glyphs
    }

    /// Number of visual lines, 0 for empty text.
    pub fn line_count(&mut self) -> usize {
        self.ensure_layout();
        if self.glyphs.is_empty() {
            return 0;
        }
        self.glyphs.iter().filter(|g| g.is_newline()).count() + 1
    }

    pub fn dimension(&mut self) -> Dimension {
        self.ensure_layout();
        if self.glyphs.is_empty() {
            return Dimension::default();
        }
        total_dimension(&self.glyphs, self.config.layout.height_per_line, self.scale(), None)
    }

    /// X offset of a caret with `cursor_pos` codepoints before it, for
    /// single-line boxes.
    pub fn cursor_x(&mut self, cursor_pos: usize) -> f32 {
        self.ensure_layout();
        if cursor_pos == 0 {
            return 0.0;
        }
        pixel_offset_for_cluster(&self.glyphs, cursor_pos as i32 - 1, self.scale())
    }

    /// Caret position for a click at `x` on visual line `line`.
    pub fn cursor_from_point(&mut self, x: f32, line: usize) -> i32 {
        self.ensure_layout();
        let scale = self.scale();
        let glyphs = visual_line(&self.glyphs, line);
        let cluster = cluster_from_pixel(x, glyphs, scale);
        // A click before the middle of a line's first LTR glyph reports the
        // start of the text; on a wrapped line that is the line start.
        match glyphs.first() {
            Some(first) if cluster == 0 && !first.is_rtl() => first.first_cluster().unwrap_or(0),
            _ => cluster,
        }
    }

    /// Resolve a click at `(x, y)`, in the coordinates of the bounds.
    pub fn click(&mut self, x: f32, y: f32) -> Option<Click> {
        self.ensure_layout();
        let bounds = self.effective_bounds();
        let hit = glyph_at_point(
            x - bounds.x0 as f32,
            y - bounds.y0 as f32,
            &self.glyphs,
            bounds.width() as f32,
            bounds.height() as f32,
            self.line_height(),
            self.scale(),
        )?;
        if self.glyphs[hit.glyph_index].flags.contains(GlyphFlags::URL) {
            if let Some(span) = extract_url(&self.glyphs, hit.glyph_index) {
                log::debug!("text box: clicked url {}", span.text);
                return Some(Click::Url {
                    url: span.text,
                    start: span.start_cluster,
                });
            }
        }
        Some(Click::Text {
            cluster: hit.cluster,
        })
    }

    /// Highlight `clusters` as selected in the next [`TextBox::draw`].
    pub fn set_selection(&mut self, clusters: Range<i32>) -> usize {
        self.ensure_layout();
        mark_draw_state(&mut self.glyphs, clusters, DrawFlags::MARKED)
    }

    /// Underline `clusters` as IME composition in the next [`TextBox::draw`].
    pub fn set_composing(&mut self, clusters: Range<i32>) -> usize {
        self.ensure_layout();
        mark_draw_state(&mut self.glyphs, clusters, DrawFlags::COMPOSING)
    }

    /// Position the glyphs for drawing, then reset selection and composition.
    pub fn draw(&mut self, clip: Option<&Rect>) -> Option<DrawList> {
        self.ensure_layout();
        let bounds = self.effective_bounds();
        let layout = &self.config.layout;
        let list = position_glyphs(
            &self.glyphs,
            &bounds,
            layout.h_center,
            layout.v_center,
            self.scale(),
            self.config.font.metrics(),
            clip,
        );
        clear_draw_state(&mut self.glyphs);
        list
    }

    fn scale(&self) -> ShapingScale {
        ShapingScale::new(
            self.shaper.inverse_shaping(),
            self.config.layout.effective_scale(),
        )
    }

    /// Baseline distance used for drawing and hit testing.
    fn line_height(&self) -> f32 {
        self.config.font.metrics().max_height * self.config.layout.effective_scale()
    }

    fn is_stale(&self) -> bool {
        self.shaped_with != Some(self.shaper.font_id())
    }

    fn ensure_layout(&mut self) {
        if self.is_stale() {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let mut glyphs = self.shaper.shape(&self.text);
        if self.config.urls.detect {
            mark_urls(&mut glyphs);
        }
        self.glyphs = glyphs;
        self.shaped_with = Some(self.shaper.font_id());
        self.wrap();
        log::debug!(
            "text box: {} codepoints laid out as {} glyphs",
            self.text.chars().count(),
            self.glyphs.len()
        );
    }

    fn wrap(&mut self) {
        let scale = self.scale();
        let layout = &self.config.layout;
        if layout.word_wrap {
            break_glyphs(&mut self.glyphs, self.max_line_width, scale);
        }
        if let Some(max_height) = layout.max_height {
            trim_top_to_height(&mut self.glyphs, layout.height_per_line, max_height);
        }
    }

    /// Cut the paragraphs no glyph shows anymore from the front of the text,
    /// then lay out what is left so clusters index the shortened text.
    fn drop_scrolled_text(&mut self) {
        let Some(first) = self.glyphs.iter().filter_map(GlyphRecord::first_cluster).min() else {
            return;
        };
        let Some((byte, _)) = usize::try_from(first)
            .ok()
            .and_then(|c| self.text.char_indices().nth(c))
        else {
            return;
        };
        let Some(cut) = self.text.get(..byte).and_then(|head| head.rfind('\n')) else {
            return;
        };
        self.text.drain(..=cut);
        log::debug!("text box: dropped {} scrolled bytes", cut + 1);
        self.relayout();
    }

    fn effective_bounds(&self) -> Rect {
        self.bounds.unwrap_or_else(|| {
            let (_, height) =
                total_dimension(&self.glyphs, self.line_height(), self.scale(), None).to_pixels();
            Rect::from_origin(0, 0, self.max_line_width as i32, height as i32)
        })
    }
}

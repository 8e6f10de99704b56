//! Shaped glyph records.
//!
//! A `GlyphRecord` is one glyph as produced by a text shaper: an opaque glyph
//! index, shaper-unit advance and offsets, and the list of source codepoints
//! (its cluster) it stands for. Records of one paragraph share a single
//! immutable `SourceText` behind an `Arc`, so line-broken copies can outlive
//! the shaping call without copying the string.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Per-glyph layout flags, set by the shaper and by the line breaker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GlyphFlags: u16 {
        /// The visual line starting at this glyph is right-to-left.
        const RTL_LINE          = 1 << 0;
        /// The codepoint(s) of this glyph are right-to-left.
        const RTL_CHAR          = 1 << 1;
        /// A line may be broken right after this glyph.
        const BREAKABLE         = 1 << 2;
        /// Not shaped: `x_advance` is already in pixels.
        const QUICK_DRAW        = 1 << 3;
        /// Line break marker with no visual content.
        const NEWLINE           = 1 << 4;
        /// Colored glyph (emoji).
        const COLORED           = 1 << 5;
        /// Part of a clickable URL span.
        const URL               = 1 << 6;
        /// Line break inserted by the width-based breaker, not present in the text.
        const BREAKTEXT_NEWLINE = 1 << 7;
    }
}

impl Default for GlyphFlags {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    /// Per-codepoint paint state. Empty means "draw normally".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawFlags: u8 {
        /// Selection highlight behind the codepoint.
        const MARKED    = 1 << 0;
        /// IME composing underline.
        const COMPOSING = 1 << 1;
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Index of the font face (primary or fallback) a glyph was shaped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceIdx(pub u16);

/// Immutable source codepoints shared by every glyph shaped from them.
///
/// Equality compares contents; use [`SourceText::ptr_eq`] when the question
/// is "same shaping call", which is what URL span growth needs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceText(Arc<[char]>);

impl SourceText {
    pub fn new(text: &str) -> Self {
        Self(text.chars().collect())
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Codepoint at `index`, if `index` is non-negative and in range.
    pub fn char_at(&self, index: i32) -> Option<char> {
        usize::try_from(index).ok().and_then(|i| self.0.get(i).copied())
    }

    /// Collect the inclusive codepoint range `start..=end` into a `String`.
    ///
    /// Out-of-range bounds are clamped; an inverted range yields "".
    pub fn substring(&self, start: usize, end: usize) -> String {
        if start > end || start >= self.0.len() {
            return String::new();
        }
        let end = end.min(self.0.len() - 1);
        self.0[start..=end].iter().collect()
    }
}

impl Deref for SourceText {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().collect();
        f.debug_tuple("SourceText").field(&text).finish()
    }
}

/// One shaped glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphRecord {
    /// Index into the face's glyph table (opaque here).
    pub glyph_index: u32,
    /// Pen advance in shaper units.
    pub x_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Source codepoint indices this glyph represents. More than one for
    /// ligatures; every glyph of one ligature carries the same list.
    pub cluster: Vec<i32>,
    /// Paint state per cluster member, always `cluster.len()` long.
    pub draw_flags: Vec<DrawFlags>,
    /// Position in the flat pre-break sequence; restores visual order of a
    /// line after breaking sorted it logically.
    pub original_index: u32,
    pub flags: GlyphFlags,
    pub face_idx: FaceIdx,
    /// Shared source string, absent for synthetic glyphs.
    pub source: Option<SourceText>,
}

impl GlyphRecord {
    /// Create a glyph covering `cluster` with clear draw state.
    pub fn new(glyph_index: u32, x_advance: i32, cluster: Vec<i32>) -> Self {
        let draw_flags = vec![DrawFlags::empty(); cluster.len()];
        Self {
            glyph_index,
            x_advance,
            cluster,
            draw_flags,
            ..Self::default()
        }
    }

    /// A line break from the source text.
    pub fn newline() -> Self {
        Self {
            flags: GlyphFlags::NEWLINE,
            ..Self::default()
        }
    }

    /// A line break inserted by the width-based breaker.
    pub fn synthetic_newline() -> Self {
        Self {
            flags: GlyphFlags::NEWLINE | GlyphFlags::BREAKTEXT_NEWLINE,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: GlyphFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceText) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_original_index(mut self, original_index: u32) -> Self {
        self.original_index = original_index;
        self
    }

    pub fn is_newline(&self) -> bool {
        self.flags.contains(GlyphFlags::NEWLINE)
    }

    pub fn is_synthetic_newline(&self) -> bool {
        self.flags.contains(GlyphFlags::BREAKTEXT_NEWLINE)
    }

    pub fn is_rtl(&self) -> bool {
        self.flags.contains(GlyphFlags::RTL_CHAR)
    }

    pub fn first_cluster(&self) -> Option<i32> {
        self.cluster.first().copied()
    }

    pub fn last_cluster(&self) -> Option<i32> {
        self.cluster.last().copied()
    }

    /// Position of `cluster` inside this glyph's cluster list.
    pub fn cluster_position(&self, cluster: i32) -> Option<usize> {
        self.cluster.iter().position(|&c| c == cluster)
    }

    /// Whether `other` belongs to the same ligature (identical, non-empty cluster list).
    pub fn same_cluster(&self, other: &Self) -> bool {
        !self.cluster.is_empty() && self.cluster == other.cluster
    }
}

/// Conversion from shaper units to pixels.
///
/// Every width in this crate goes through [`ShapingScale::width`]:
/// `trunc(advance * inverse_shaping) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapingScale {
    /// Shaper units to base-font pixels.
    pub inverse_shaping: f32,
    /// Zoom applied on top (GUI scale, font settings).
    pub scale: f32,
}

impl ShapingScale {
    pub const IDENTITY: Self = Self {
        inverse_shaping: 1.0,
        scale: 1.0,
    };

    pub fn new(inverse_shaping: f32, scale: f32) -> Self {
        Self {
            inverse_shaping,
            scale,
        }
    }

    /// Pixel width of `units` shaper units.
    pub fn width(self, units: i32) -> f32 {
        (units as f32 * self.inverse_shaping).trunc() * self.scale
    }

    /// Pixel advance of `glyph`; line break markers have none.
    pub fn glyph_width(self, glyph: &GlyphRecord) -> f32 {
        if glyph.is_newline() {
            0.0
        } else {
            self.width(glyph.x_advance)
        }
    }
}

impl Default for ShapingScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Source text covered by `glyphs`, in logical order.
///
/// Clusters are deduplicated and sorted, so an RTL line reads the way it was
/// typed. Glyphs without a source contribute nothing.
pub fn logical_text(glyphs: &[GlyphRecord]) -> String {
    let mut clusters: Vec<(i32, char)> = glyphs
        .iter()
        .filter(|g| !g.is_newline())
        .filter_map(|g| g.source.as_ref().map(|s| (g, s)))
        .flat_map(|(g, s)| g.cluster.iter().filter_map(|&c| s.char_at(c).map(|ch| (c, ch))))
        .collect();
    clusters.sort_unstable_by_key(|&(c, _)| c);
    clusters.dedup_by_key(|&mut (c, _)| c);
    clusters.into_iter().map(|(_, ch)| ch).collect()
}

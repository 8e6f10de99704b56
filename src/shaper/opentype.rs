//! Shaping via `rustybuzz`: each paragraph is shaped as one run with script
//! and direction guessed from its contents, and byte clusters are mapped
//! back to codepoint indices.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use glyph_layout_core::glyph::{GlyphFlags, GlyphRecord, SourceText};

use super::{Shaper, shape_paragraphs};

/// Parse OpenType feature strings like `"liga"` or `"-calt"`.
///
/// Invalid tags (not exactly 4 bytes) are logged and skipped.
pub fn parse_features(strings: &[String]) -> Vec<rustybuzz::Feature> {
    strings
        .iter()
        .filter_map(|s| {
            let (tag_str, value) = if let Some(rest) = s.strip_prefix('-') {
                (rest, 0)
            } else {
                (s.as_str(), 1)
            };
            let Ok(bytes) = <[u8; 4]>::try_from(tag_str.as_bytes()) else {
                log::warn!("shaper: ignoring invalid feature tag: {s}");
                return None;
            };
            let tag = rustybuzz::ttf_parser::Tag::from_bytes(&bytes);
            Some(rustybuzz::Feature::new(tag, value, ..))
        })
        .collect()
}

/// Shapes text against one OpenType face.
///
/// Advances stay in font units; [`Shaper::inverse_shaping`] is
/// `size / units_per_em`.
pub struct OpenTypeShaper {
    data: Vec<u8>,
    features: Vec<rustybuzz::Feature>,
    size: f32,
    units_per_em: f32,
    font_id: u64,
}

impl OpenTypeShaper {
    /// Load the first face of the font file at `path`.
    pub fn load(path: &Path, size: f32, features: &[String]) -> Result<Self, String> {
        let data =
            std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_bytes(data, size, features)
            .map_err(|e| format!("{e} in {}", path.display()))
    }

    /// Use the first face of an in-memory font file.
    pub fn from_bytes(data: Vec<u8>, size: f32, features: &[String]) -> Result<Self, String> {
        let units_per_em = rustybuzz::Face::from_slice(&data, 0)
            .map(|face| face.units_per_em())
            .ok_or_else(|| "no usable font face".to_owned())?;
        let mut shaper = Self {
            data,
            features: parse_features(features),
            size: 0.0,
            units_per_em: units_per_em.max(1) as f32,
            font_id: 0,
        };
        shaper.set_size(size);
        log::debug!(
            "shaper: loaded face, {} units per em, {} features",
            units_per_em,
            shaper.features.len()
        );
        Ok(shaper)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Change the font size. Previously shaped glyphs become stale.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
        let mut hasher = DefaultHasher::new();
        self.data.hash(&mut hasher);
        size.to_bits().hash(&mut hasher);
        self.font_id = hasher.finish();
    }
}

impl Shaper for OpenTypeShaper {
    fn shape(&mut self, text: &str) -> Vec<GlyphRecord> {
        let source = SourceText::new(text);
        let Some(face) = rustybuzz::Face::from_slice(&self.data, 0) else {
            log::error!("shaper: font face became unreadable");
            return Vec::new();
        };
        let features = &self.features;
        shape_paragraphs(&source, |range| {
            let paragraph: String = source[range.clone()].iter().collect();
            if paragraph.is_empty() {
                return Vec::new();
            }
            let mut buffer = rustybuzz::UnicodeBuffer::new();
            buffer.push_str(&paragraph);
            buffer.guess_segment_properties();
            let rtl = buffer.direction() == rustybuzz::Direction::RightToLeft;

            let glyph_buffer = rustybuzz::shape(&face, features, buffer);
            let infos = glyph_buffer.glyph_infos();
            let clusters = ClusterMap::new(&paragraph, range.start, infos);
            infos
                .iter()
                .zip(glyph_buffer.glyph_positions())
                .map(|(info, pos)| {
                    let mut glyph = GlyphRecord::new(
                        info.glyph_id,
                        pos.x_advance,
                        clusters.codepoints(info.cluster as usize),
                    );
                    glyph.x_offset = pos.x_offset;
                    glyph.y_offset = pos.y_offset;
                    if rtl {
                        glyph.flags |= GlyphFlags::RTL_LINE | GlyphFlags::RTL_CHAR;
                    }
                    glyph
                })
                .collect()
        })
    }

    fn font_id(&self) -> u64 {
        self.font_id
    }

    fn inverse_shaping(&self) -> f32 {
        self.size / self.units_per_em
    }
}

/// Byte cluster to codepoint list mapping for one shaped paragraph.
struct ClusterMap {
    /// Byte offset of every codepoint of the paragraph.
    char_starts: Vec<usize>,
    /// Byte offsets that start a shaper cluster, sorted.
    cluster_starts: Vec<usize>,
    /// Codepoint index of the paragraph's first codepoint in the whole text.
    base: usize,
}

impl ClusterMap {
    fn new(paragraph: &str, base: usize, infos: &[rustybuzz::GlyphInfo]) -> Self {
        let mut cluster_starts: Vec<usize> = infos.iter().map(|i| i.cluster as usize).collect();
        cluster_starts.sort_unstable();
        cluster_starts.dedup();
        Self {
            char_starts: paragraph.char_indices().map(|(b, _)| b).collect(),
            cluster_starts,
            base,
        }
    }

    /// Codepoints from the cluster starting at byte `cluster` up to the next
    /// codepoint that starts another cluster.
    ///
    /// HarfBuzz merges clusters so a ligature's components all report the
    /// start byte of the ligature; every codepoint up to the next reported
    /// start belongs to it.
    fn codepoints(&self, cluster: usize) -> Vec<i32> {
        let first = self.char_starts.partition_point(|&b| b < cluster);
        let end = self
            .cluster_starts
            .get(self.cluster_starts.partition_point(|&b| b <= cluster))
            .map_or(self.char_starts.len(), |&b| self.char_starts.partition_point(|&s| s < b));
        (first..end.max(first + 1)).map(|i| (self.base + i) as i32).collect()
    }
}

//! Regex URL detection over shaped text.
//!
//! Finds URLs in the source string of a glyph sequence and flags every glyph
//! covering part of one with `GlyphFlags::URL`, which is what
//! [`glyph_layout_core::url::extract_url`] grows spans through on click.

use std::ops::Range;
use std::sync::LazyLock;

use glyph_layout_core::glyph::{GlyphFlags, GlyphRecord, SourceText};
use regex::Regex;

/// A URL found in a string, located by codepoint indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedUrl {
    pub url: String,
    /// Codepoint range of the URL in the searched string.
    pub chars: Range<usize>,
}

/// URL regex pattern.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?|ftp|file)://[^\s<>\[\]'"]+"#).expect("URL regex is valid")
});

/// Trim trailing punctuation from a URL, preserving balanced parentheses.
fn trim_url_trailing(url: &str) -> &str {
    let mut s = url;
    loop {
        let prev = s;
        s = s.trim_end_matches(['.', ',', ';', ':', '!', '?']);
        // Trim trailing ')' only if it's unbalanced
        if let Some(stripped) = s.strip_suffix(')') {
            let open = s.chars().filter(|&c| c == '(').count();
            let close = s.chars().filter(|&c| c == ')').count();
            if close > open {
                s = stripped;
            }
        }
        if s == prev {
            break;
        }
    }
    s
}

/// Find every URL in `text`.
#[allow(clippy::string_slice)]
pub fn detect_urls(text: &str) -> Vec<DetectedUrl> {
    let mut urls = Vec::new();
    for m in URL_RE.find_iter(text) {
        let trimmed = trim_url_trailing(m.as_str());
        // Scheme only, nothing to open.
        if trimmed.len() <= "https://".len() {
            continue;
        }
        let start = text[..m.start()].chars().count();
        urls.push(DetectedUrl {
            url: trimmed.to_owned(),
            chars: start..start + trimmed.chars().count(),
        });
    }
    urls
}

/// Flag glyphs whose cluster intersects a URL in their source string.
///
/// Sequences stitched from several strings are searched string by string.
/// Returns how many glyphs were flagged.
pub fn mark_urls(glyphs: &mut [GlyphRecord]) -> usize {
    let mut sources: Vec<SourceText> = Vec::new();
    for source in glyphs.iter().filter_map(|g| g.source.as_ref()) {
        if !sources.iter().any(|s| SourceText::ptr_eq(s, source)) {
            sources.push(source.clone());
        }
    }

    let mut marked = 0;
    for source in &sources {
        let text: String = source.iter().collect();
        let urls = detect_urls(&text);
        if urls.is_empty() {
            continue;
        }
        log::debug!("found {} urls in {} codepoints", urls.len(), source.len());
        for glyph in glyphs.iter_mut() {
            if !glyph.source.as_ref().is_some_and(|s| SourceText::ptr_eq(s, source)) {
                continue;
            }
            let in_url = glyph.cluster.iter().any(|&c| {
                usize::try_from(c).is_ok_and(|c| urls.iter().any(|u| u.chars.contains(&c)))
            });
            if in_url {
                glyph.flags |= GlyphFlags::URL;
                marked += 1;
            }
        }
    }
    marked
}

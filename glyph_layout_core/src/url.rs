//! Recover the text of a clickable URL span from its glyphs.
//!
//! URL glyphs are flagged by whoever detected the link (see the app crate's
//! regex detection). Given one flagged glyph, the span grows left and right
//! through neighbouring codepoints as long as the glyph covering them is also
//! flagged and comes from the same source string.

use std::collections::HashMap;

use crate::glyph::{GlyphFlags, GlyphRecord, SourceText};

/// Text of a URL span and the source codepoint index it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSpan {
    pub text: String,
    pub start_cluster: i32,
}

/// Extract the URL containing `glyphs[glyph_index]`.
///
/// Returns `None` when the glyph does not exist, is not flagged `URL`, has no
/// source string, or covers no codepoint.
pub fn extract_url(glyphs: &[GlyphRecord], glyph_index: usize) -> Option<UrlSpan> {
    let glyph = glyphs.get(glyph_index)?;
    if !glyph.flags.contains(GlyphFlags::URL) {
        return None;
    }
    let source = glyph.source.as_ref()?;
    let (Some(mut start), Some(mut end)) = (glyph.first_cluster(), glyph.last_cluster()) else {
        log::debug!("url glyph {glyph_index} covers no codepoint");
        return None;
    };

    let owners = cluster_owners(glyphs, source);
    let is_url_char = |cluster: i32| {
        let Some(c) = source.char_at(cluster) else {
            return false;
        };
        !is_line_control(c)
            && owners
                .get(&cluster)
                .is_some_and(|&i| glyphs[i].flags.contains(GlyphFlags::URL))
    };

    while start > 0 && is_url_char(start - 1) {
        start -= 1;
    }
    while is_url_char(end + 1) {
        end += 1;
    }

    let text = source.substring(usize::try_from(start).ok()?, usize::try_from(end).ok()?);
    Some(UrlSpan {
        text,
        start_cluster: start,
    })
}

/// Cluster index to glyph index, for glyphs shaped from `source` only.
///
/// Widgets may stitch glyphs of several strings into one sequence; cluster
/// numbers are only meaningful within one string.
fn cluster_owners(glyphs: &[GlyphRecord], source: &SourceText) -> HashMap<i32, usize> {
    let mut owners = HashMap::new();
    for (i, glyph) in glyphs.iter().enumerate() {
        if !glyph.source.as_ref().is_some_and(|s| SourceText::ptr_eq(s, source)) {
            continue;
        }
        for &cluster in &glyph.cluster {
            owners.insert(cluster, i);
        }
    }
    owners
}

fn is_line_control(c: char) -> bool {
    matches!(c, '\n' | '\t' | '\r')
}

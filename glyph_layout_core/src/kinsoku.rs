//! Line break opportunity tables.
//!
//! `is_breakable` classifies a codepoint as a place a line may end (CJK
//! ideographs, Hangul, soft hyphen, space, slashes). The kinsoku tables veto
//! some of those: punctuation that may not start a line (closing brackets,
//! small kana, full stops) and punctuation that may not end one (opening
//! brackets, currency prefixes). Shapers combine them through
//! [`breakable_after`] to set `GlyphFlags::BREAKABLE`.

/// Whether a line may be broken right after `c`.
pub fn is_breakable(c: char) -> bool {
    matches!(
        c as u32,
        0x3000..=0x9FFF         // CJK symbols, kana, unified ideographs
        | 0xAC00..=0xD7A3       // Hangul syllables
        | 0xF900..=0xFAFF       // CJK compatibility ideographs
        | 0x00AD                // soft hyphen
        | 0x0020                // space
        | 0x002F                // slash
        | 0x005C // backslash
    )
}

/// Characters that must not begin a line.
pub fn no_starting(c: char) -> bool {
    matches!(
        c,
        // Closing brackets and quotes
        ')' | ']' | '}' | '»' | '’' | '”' | '〕' | '〉' | '》' | '」' | '』' | '】'
            | '〙' | '〗' | '〟' | '｠' | '）' | '］' | '｝' | '｣'
            // Hyphens and iteration marks
            | '‐' | '゠' | '–' | '〜' | '～' | 'ー' | 'ヽ' | 'ヾ' | 'ゝ' | 'ゞ' | '々'
            | '〻'
            // Small kana
            | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'っ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ'
            | 'ゕ' | 'ゖ' | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ッ' | 'ャ' | 'ュ'
            | 'ョ' | 'ヮ' | 'ヵ' | 'ヶ' | 'ㇰ' | 'ㇱ' | 'ㇲ' | 'ㇳ' | 'ㇴ' | 'ㇵ'
            | 'ㇶ' | 'ㇷ' | 'ㇸ' | 'ㇹ' | 'ㇺ' | 'ㇻ' | 'ㇼ' | 'ㇽ' | 'ㇾ' | 'ㇿ'
            // Delimiters and separators
            | '!' | '?' | ',' | '.' | ':' | ';' | '%' | '‼' | '⁇' | '⁈' | '⁉'
            | '・' | '、' | '。' | '，' | '．' | '：' | '；' | '！' | '？' | '％'
            | '｡' | '､' | '･' | 'ﾞ' | 'ﾟ' | '゛' | '゜'
    )
}

/// Characters that must not end a line.
pub fn no_ending(c: char) -> bool {
    matches!(
        c,
        // Opening brackets and quotes
        '(' | '[' | '{' | '«' | '‘' | '“' | '〔' | '〈' | '《' | '「' | '『' | '【'
            | '〘' | '〖' | '〝' | '｟' | '（' | '［' | '｛' | '｢'
            // Prefixed units
            | '$' | '£' | '¥' | '＄' | '￡' | '￥' | '＃' | '＠'
    )
}

/// Whether a line may be broken right after `text[index]`.
///
/// The character itself must be breakable and may not be a no-ending mark,
/// and the character following it (if any) may not be a no-starting mark.
pub fn breakable_after(text: &[char], index: usize) -> bool {
    let Some(&c) = text.get(index) else {
        return false;
    };
    if !is_breakable(c) || no_ending(c) {
        return false;
    }
    text.get(index + 1).is_none_or(|&next| !no_starting(next))
}

#[cfg(test)]
mod tests;

use super::{breakable_after, is_breakable, no_ending, no_starting};

#[test]
fn ascii_break_opportunities() {
    assert!(is_breakable(' '));
    assert!(is_breakable('/'));
    assert!(is_breakable('\\'));
    assert!(is_breakable('\u{AD}'));
    assert!(!is_breakable('a'));
    assert!(!is_breakable('-'));
}

#[test]
fn cjk_and_hangul_break_anywhere() {
    assert!(is_breakable('漢'));
    assert!(is_breakable('か'));
    assert!(is_breakable('한'));
    assert!(is_breakable('\u{F900}'));
}

#[test]
fn kinsoku_tables() {
    assert!(no_starting('。'));
    assert!(no_starting('っ'));
    assert!(no_starting(')'));
    assert!(!no_starting('あ'));
    assert!(no_ending('「'));
    assert!(no_ending('$'));
    assert!(!no_ending('」'));
}

#[test]
fn breakable_after_space() {
    let text: Vec<char> = "a b".chars().collect();
    assert!(!breakable_after(&text, 0));
    assert!(breakable_after(&text, 1));
    assert!(!breakable_after(&text, 2));
    assert!(!breakable_after(&text, 3));
}

#[test]
fn breakable_after_respects_following_no_start_mark() {
    let text: Vec<char> = "漢。字".chars().collect();
    // No break between the ideograph and the full stop.
    assert!(!breakable_after(&text, 0));
    assert!(breakable_after(&text, 1));
}

#[test]
fn no_ending_mark_vetoes_break() {
    let text: Vec<char> = "「字".chars().collect();
    assert!(is_breakable('「'));
    assert!(!breakable_after(&text, 0));
}

use std::path::PathBuf;

use super::{Command, WrapOptions, help, parse_args, wrap_text};
use crate::config::Config;

fn args(list: &[&str]) -> Result<Command, String> {
    parse_args(list.iter().map(|s| (*s).to_owned()))
}

fn wrapped(config: &Config, text: &str, urls: bool) -> String {
    let mut out = Vec::new();
    wrap_text(config, text, urls, &mut out).expect("wrap");
    String::from_utf8(out).expect("utf-8")
}

fn narrow_config() -> Config {
    let mut config = Config::default();
    // Six cells of 8px.
    config.layout.max_line_width = 48.0;
    config
}

#[test]
fn info_flags_win() {
    assert_eq!(args(&["--print-config"]), Ok(Command::PrintConfig));
    assert_eq!(args(&["-V"]), Ok(Command::Version));
    assert_eq!(args(&["--width", "10", "--help"]), Ok(Command::Help));
}

#[test]
fn wrap_options() {
    let parsed = args(&["--config", "c.toml", "--width", "120", "--urls", "in.txt"]);
    assert_eq!(
        parsed,
        Ok(Command::Wrap(WrapOptions {
            config: Some(PathBuf::from("c.toml")),
            width: Some(120.0),
            urls: true,
            input: Some(PathBuf::from("in.txt")),
        }))
    );
    assert_eq!(args(&[]), Ok(Command::Wrap(WrapOptions::default())));
}

#[test]
fn bad_arguments() {
    assert!(args(&["--width"]).is_err());
    assert!(args(&["--width", "wide"]).is_err());
    assert!(args(&["--config"]).is_err());
    assert!(args(&["--bogus"]).is_err());
    assert!(args(&["a.txt", "b.txt"]).is_err());
}

#[test]
fn help_lists_options() {
    let text = help();
    assert!(text.contains("--width PX"));
    assert!(text.contains("--print-config"));
}

#[test]
fn one_output_line_per_visual_line() {
    let config = narrow_config();
    assert_eq!(wrapped(&config, "hello world\n", false), "hello \nworld\n");
}

#[test]
fn blank_lines_survive() {
    let config = narrow_config();
    assert_eq!(wrapped(&config, "ab\n\ncd", false), "ab\n\ncd\n");
}

#[test]
fn empty_input_prints_nothing() {
    assert_eq!(wrapped(&Config::default(), "", false), "");
}

#[test]
fn urls_are_listed_after_text() {
    let out = wrapped(&Config::default(), "see http://x.com here", true);
    assert_eq!(out, "see http://x.com here\nurl 4 http://x.com\n");
}

#[test]
fn missing_font_is_an_error() {
    let mut config = Config::default();
    config.font.path = Some(PathBuf::from("/nonexistent/font.ttf"));
    let mut out = Vec::new();
    let err = wrap_text(&config, "abc", false, &mut out).expect_err("missing font");
    assert!(err.starts_with("failed to read"), "{err}");
}

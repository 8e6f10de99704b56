//! `glyphwrap` command line: argument parsing and the wrap command.

use std::io::{Read, Write};
use std::path::PathBuf;

use glyph_layout_core::glyph::{GlyphRecord, logical_text};

use crate::config::Config;
use crate::shaper::{OpenTypeShaper, QuickShaper, Shaper};
use crate::text_box::TextBox;
use crate::url_detect::detect_urls;

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PrintConfig,
    Version,
    Help,
    Wrap(WrapOptions),
}

/// Options of the default wrap command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapOptions {
    pub config: Option<PathBuf>,
    /// Overrides `layout.max_line_width`.
    pub width: Option<f32>,
    /// List detected URLs after the wrapped text.
    pub urls: bool,
    /// Read from this file instead of stdin.
    pub input: Option<PathBuf>,
}

pub fn help() -> String {
    format!(
        "glyphwrap {}\n\
         Break text into lines the way a GUI text box lays it out\n\n\
         USAGE:\n    glyphwrap [OPTIONS] [FILE]\n\n\
         OPTIONS:\n\
         \x20   --config PATH     Load configuration from PATH\n\
         \x20   --width PX        Line width in pixels\n\
         \x20   --urls            List detected URLs after the text\n\
         \x20   --print-config    Print the default configuration to stdout\n\
         \x20   --version, -V     Print version information\n\
         \x20   --help, -h        Print this help message\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Parse arguments (without the program name).
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut options = WrapOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print-config" => return Ok(Command::PrintConfig),
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--urls" => options.urls = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--width" => {
                let value = args.next().ok_or("--width needs a value")?;
                let width: f32 = value
                    .parse()
                    .map_err(|e| format!("invalid width {value:?}: {e}"))?;
                options.width = Some(width);
            }
            s if s.starts_with('-') && s != "-" => return Err(format!("unknown option {s}")),
            _ if options.input.is_some() => return Err(format!("unexpected argument {arg}")),
            _ => options.input = Some(PathBuf::from(arg)),
        }
    }
    Ok(Command::Wrap(options))
}

/// Load configuration and input for `options`, then write the wrapped text.
pub fn run<W: Write>(options: &WrapOptions, out: &mut W) -> Result<(), String> {
    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    if let Some(width) = options.width {
        config.layout.max_line_width = width;
    }

    let mut text = String::new();
    match &options.input {
        Some(path) if path.as_os_str() != "-" => {
            text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        }
        _ => {
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
        }
    }
    wrap_text(&config, &text, options.urls, out)
}

/// Write `text` one visual line per output line.
pub fn wrap_text<W: Write>(
    config: &Config,
    text: &str,
    list_urls: bool,
    out: &mut W,
) -> Result<(), String> {
    let shaper: Box<dyn Shaper> = match &config.font.path {
        Some(path) => Box::new(OpenTypeShaper::load(
            path,
            config.font.size,
            &config.font.features,
        )?),
        None => Box::new(QuickShaper::new(config.font.cell_advance)),
    };
    let text = text
        .strip_suffix('\n')
        .map_or(text, |t| t.strip_suffix('\r').unwrap_or(t));

    let mut text_box = TextBox::new(config.clone(), shaper);
    text_box.set_text(text);
    let write_err = |e: std::io::Error| format!("failed to write output: {e}");
    if !text.is_empty() {
        for line in text_box.glyphs().split(GlyphRecord::is_newline) {
            writeln!(out, "{}", logical_text(line)).map_err(write_err)?;
        }
    }
    if list_urls {
        for url in detect_urls(text) {
            writeln!(out, "url {} {}", url.chars.start, url.url).map_err(write_err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;

//! Text layout front end.
//!
//! Wraps the `glyph_layout_core` engine with what an application needs
//! around it: TOML configuration, shapers that produce glyph records, regex
//! URL marking, and a [`text_box::TextBox`] model tying them together.

pub mod cli;
pub mod config;
pub mod shaper;
pub mod text_box;
pub mod url_detect;

//! Convert plain-text ticket descriptions into Atlassian Document Format.
//!
//! The input markup is line oriented: `- ` starts a bullet item, an unindented
//! line ending in `:` is a heading, anything else is a paragraph. Within
//! paragraphs and bullets, backtick-quoted text becomes inline code and bare
//! `http(s)://` URLs become links.

mod adf;
mod block;
mod config;
mod error;
mod inline;
mod parser;

pub use adf::{to_json, to_json_with_config, to_value};
pub use block::{ADF_VERSION, Block, Document, HEADING_LEVEL, List, ListItem, Span};
pub use config::{Config, OutputConfig};
pub use error::{ConfigError, Error};
pub use inline::parse_inline;
pub use parser::build_document;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Convert plain text to ADF JSON using default config.
pub fn text_to_adf(text: &str) -> Result<String, Error> {
    text_to_adf_with_config(text, &Config::compiled_default())
}

/// Convert plain text to ADF JSON with custom config.
pub fn text_to_adf_with_config(text: &str, config: &Config) -> Result<String, Error> {
    let doc = build_document(text);
    Ok(adf::to_json_with_config(&doc, &config.output)?)
}

/// Read a file and convert its contents to ADF JSON.
///
/// `\r\n` and lone `\r` line endings are read as `\n`.
pub fn convert_file(path: &Path, config: &Config) -> Result<String, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    text_to_adf_with_config(&normalize_newlines(&text), config)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

//! Declaration extraction from document text
//!
//! The scan recognizes exactly one textual pattern anywhere in the
//! document: the sigil, an identifier, a colon, and a value running to a
//! statement terminator or end of line. There is no grammar awareness;
//! occurrences inside comments or strings are collected like any other.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DEFAULT_SIGIL;

/// One `sigil name : value` occurrence in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Identifier, case preserved.
    pub name: String,
    /// Raw trailing text up to but excluding a statement terminator or
    /// newline.
    pub value: String,
}

/// Shared pattern for the default sigil, compiled once per process.
static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| declaration_pattern(DEFAULT_SIGIL));

/// Builds the declaration pattern for a sigil character.
///
/// Pattern shape: sigil, one or more identifier characters (ASCII
/// letters, digits, hyphen, underscore) captured as the name, optional
/// whitespace, a colon, optional whitespace, then one or more characters
/// excluding newline and `;` captured as the value. Matching is
/// case-insensitive; captured groups preserve case. The whitespace around
/// the colon stays on the declaration's line so a valueless `name:` never
/// captures the following line as its value.
pub fn declaration_pattern(sigil: char) -> Regex {
    let source = format!(
        r"(?i){}([A-Za-z0-9_-]+)[ \t]*:[ \t]*([^;\r\n]+)",
        regex::escape(&sigil.to_string())
    );
    // The sigil is escaped, so the source is valid for any configured char.
    Regex::new(&source).expect("declaration pattern compiles")
}

/// Pattern for `sigil`, reusing the shared default-sigil instance.
pub(crate) fn pattern_for(sigil: char) -> Regex {
    if sigil == DEFAULT_SIGIL {
        DEFAULT_PATTERN.clone()
    } else {
        declaration_pattern(sigil)
    }
}

/// Scans `text` left to right and collects every declaration in document
/// order. Later duplicates are retained as separate entries.
pub fn scan_declarations(pattern: &Regex, text: &str) -> Vec<Declaration> {
    pattern
        .captures_iter(text)
        .map(|captures| Declaration {
            name: captures[1].to_string(),
            value: captures[2].to_string(),
        })
        .collect()
}

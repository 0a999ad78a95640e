//! Variable hint pipeline
//!
//! This module provides:
//! - Declaration extraction: a full-document scan for `sigil name : value`
//!   occurrences (no syntax awareness; comments and strings match too)
//! - Subsequence filtering of candidates against the text typed since the
//!   session started
//! - Case-insensitive ranking and rendering of display forms
//! - Session state tracking between the trigger event and its resolution

pub mod engine;
pub mod extract;
pub mod filter;
pub mod ranking;
pub mod session;

pub use engine::{HintError, VariableHintEngine};
pub use extract::{Declaration, declaration_pattern, scan_declarations};
pub use filter::{filter_candidates, is_subsequence};
pub use ranking::{DISPLAY_SEPARATOR, rank_candidates, render_display_form, render_display_forms};
pub use session::Session;

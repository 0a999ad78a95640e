//! The hint engine: trigger detection through selection
//!
//! One engine instance serves one provider registration. All state for a
//! completion interaction lives in the `Session` value the host threads
//! through the calls; the engine itself holds only configuration and the
//! compiled declaration pattern.

use lsp_types::{Position, Range};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::host::HostEditor;

use super::extract::{pattern_for, scan_declarations};
use super::filter::filter_candidates;
use super::ranking::{rank_candidates, render_display_forms};
use super::session::Session;

/// Errors surfaced by the engine. Invalid session state is not an error;
/// it is signalled by `None` from the query operations.
#[derive(Debug, Error)]
pub enum HintError {
    /// The picked display form is not in the session's current hint list.
    /// The document is left untouched.
    #[error("display form not in current hint list: {display}")]
    UnknownSelection { display: String },
}

/// Context-sensitive variable completion engine.
///
/// The host drives it through four operations: `can_activate` on every
/// inserted character, `get_candidates` right after activation,
/// `refine_query` on subsequent keystrokes, and `apply_selection` when
/// the user picks a hint.
#[derive(Debug, Clone)]
pub struct VariableHintEngine {
    config: EngineConfig,
    pattern: Regex,
}

impl VariableHintEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let pattern = pattern_for(config.sigil);
        Self { config, pattern }
    }

    /// Sigil character this engine triggers on.
    pub fn sigil(&self) -> char {
        self.config.sigil
    }

    /// Trigger detection: true only when the inserted character is the
    /// configured sigil. No side effects on false.
    pub fn can_activate(&self, inserted: char) -> bool {
        inserted == self.config.sigil
    }

    /// Starts a session at the freshly typed sigil.
    ///
    /// The host calls this after `can_activate` returned true, with the
    /// cursor sitting immediately after the inserted sigil; the session
    /// span starts at the sigil cell itself so the typed text always
    /// begins with the sigil.
    pub fn begin_session(&self, host: &impl HostEditor) -> Session {
        let cursor = host.cursor_position();
        let start = Position::new(cursor.line, cursor.character.saturating_sub(1));
        debug!("session started at {}:{}", start.line, start.character);
        Session::begin(start)
    }

    /// Runs the pipeline: validity check, extraction, filter, ranking.
    ///
    /// Returns `None` when the session has become invalid and the host
    /// should close the hint list and drop the session. An empty slice
    /// means the session is alive but nothing matches ("no hints").
    pub fn get_candidates<'s>(
        &self,
        session: &'s mut Session,
        just_typed: Option<char>,
        host: &impl HostEditor,
    ) -> Option<&'s [String]> {
        let cursor = host.cursor_position();
        if !session.valid_position(just_typed, cursor, self.config.sigil) {
            debug!(
                "session invalidated at {}:{} (typed {:?})",
                cursor.line, cursor.character, just_typed
            );
            return None;
        }

        let typed = host.range_text(Range::new(session.start(), cursor));
        session.set_typed_since_start(typed);

        // Full rescan on every keystroke. Documents in scope are small;
        // correctness over incremental bookkeeping.
        let declarations = scan_declarations(&self.pattern, &host.full_text());
        let mut candidates = filter_candidates(
            session.typed_since_start(),
            self.config.sigil,
            declarations,
        );
        rank_candidates(&mut candidates);
        let display_forms = render_display_forms(&candidates);
        debug!(
            "query {:?} produced {} hint(s)",
            session.typed_since_start(),
            display_forms.len()
        );
        session.set_results(candidates, display_forms);
        Some(session.display_forms())
    }

    /// Keystroke refinement: the same pipeline with the just-typed
    /// character checked first.
    pub fn refine_query<'s>(
        &self,
        session: &'s mut Session,
        just_typed: char,
        host: &impl HostEditor,
    ) -> Option<&'s [String]> {
        self.get_candidates(session, Some(just_typed), host)
    }

    /// Replaces the typed span with the picked candidate's name.
    ///
    /// Only the name is inserted, never the value. The replacement is a
    /// single host call; an unknown display form leaves the document
    /// untouched.
    pub fn apply_selection(
        &self,
        session: &Session,
        display_form: &str,
        host: &mut impl HostEditor,
    ) -> Result<(), HintError> {
        let Some(index) = session
            .display_forms()
            .iter()
            .position(|form| form == display_form)
        else {
            warn!("selection did not resolve: {:?}", display_form);
            return Err(HintError::UnknownSelection {
                display: display_form.to_string(),
            });
        };
        let name = &session.candidates()[index].name;
        let cursor = host.cursor_position();
        host.replace_range(Range::new(session.start(), cursor), name);
        debug!("applied {:?} over typed span", name);
        Ok(())
    }
}

impl Default for VariableHintEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

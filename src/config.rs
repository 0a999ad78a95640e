//! Engine configuration and host-side provider registration
//!
//! The host decides which documents are routed to the engine and at what
//! priority relative to its other completion providers. None of this is
//! consulted by the pipeline itself; it is carried here so hosts can load
//! it from their own configuration files.

use serde::{Deserialize, Serialize};

/// Default trigger character. It both starts a completion session and
/// prefixes variable names in the source syntax.
pub const DEFAULT_SIGIL: char = '@';

fn default_sigil() -> char {
    DEFAULT_SIGIL
}

/// Configuration for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sigil character that triggers a session and prefixes declarations.
    #[serde(default = "default_sigil")]
    pub sigil: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
        }
    }
}

/// Registration data the host uses to route documents to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRegistration {
    /// Document categories this engine applies to (e.g. "less", "stylus").
    pub language_ids: Vec<String>,

    /// Priority relative to other completion providers. Higher is
    /// consulted first; ties are host-defined.
    #[serde(default)]
    pub priority: i32,

    /// Engine configuration handed to `VariableHintEngine::new` when the
    /// host activates the provider.
    #[serde(default)]
    pub config: EngineConfig,
}

impl ProviderRegistration {
    /// Registration for the given language ids with default priority and
    /// engine configuration.
    pub fn for_language_ids<I, S>(language_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language_ids: language_ids.into_iter().map(Into::into).collect(),
            priority: 0,
            config: EngineConfig::default(),
        }
    }
}

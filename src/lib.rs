pub mod config;
pub mod hints;
pub mod host;
pub mod logging;

pub use config::{EngineConfig, ProviderRegistration};
pub use hints::{Declaration, HintError, Session, VariableHintEngine};
pub use host::{HostEditor, ScratchBuffer};

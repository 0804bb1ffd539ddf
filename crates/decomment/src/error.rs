//! Configuration errors.

use decomment_core::ProfileError;

/// The options do not describe a usable language setup.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown language {name:?}")]
    UnknownLanguage { name: String },

    #[error("invalid profile {name:?}: {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: ProfileError,
    },

    #[error("alias {alias:?} refers to missing language {target:?}")]
    DanglingAlias { alias: String, target: String },
}

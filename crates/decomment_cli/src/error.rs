//! Command-line errors.

use std::io;
use std::path::PathBuf;

use decomment::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid options file {path:?}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{second:?} and {first:?} would both be written to {dest:?}")]
    OutputCollision {
        dest: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

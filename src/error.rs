//! Errors that abort a run.
//!
//! Problems scoped to a single config line or directory are not errors; they are
//! reported as diagnostics and skipped where they are found.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open config file '{}': {source}", .path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

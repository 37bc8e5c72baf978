use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scenarios::ScenarioId;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("no timing recorded for scenario {0}")]
    MissingTiming(ScenarioId),
    #[error("failed to read ledger {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write side file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("side file {path} holds {found} table rows, expected {expected}")]
    Verification {
        path: PathBuf,
        found: usize,
        expected: usize,
    },
    #[error("failed to replace {path} with its side file")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::storage::ledger::document::{count_table_rows, LedgerDocument};
use crate::storage::ledger::errors::LedgerError;
use crate::storage::ledger::row::LedgerRow;

pub const DEFAULT_LEDGER_FILE: &str = "benchmark_results.md";

/// A ledger file on disk, replaced atomically through a `.tmp` side file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn side_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Recovered rows of the current file; a missing file is an empty ledger.
    pub fn load(&self) -> Result<LedgerDocument, LedgerError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(LedgerDocument::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(LedgerDocument::default()),
            Err(source) => Err(LedgerError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Current file contents, `None` when it does not exist.
    pub fn read_raw(&self) -> Result<Option<String>, LedgerError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LedgerError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Appends `row` and returns the document that was written.
    ///
    /// On any failure the side file is removed and the previous ledger is
    /// left untouched.
    pub fn append(&self, row: LedgerRow) -> Result<LedgerDocument, LedgerError> {
        let mut document = self.load()?;
        document.push(row);

        let expected = document.table_rows();
        self.replace_with(&document.render(), expected)?;

        debug!(
            path = %self.path.display(),
            rows = document.rows().len(),
            "ledger updated"
        );
        Ok(document)
    }

    /// Replaces the ledger with downloaded contents, normalised through the
    /// same recovery as [`load`](Self::load).
    pub fn install(&self, contents: &str) -> Result<LedgerDocument, LedgerError> {
        let document = LedgerDocument::parse(contents);
        self.replace_with(&document.render(), document.table_rows())?;
        Ok(document)
    }

    fn replace_with(&self, text: &str, expected: usize) -> Result<(), LedgerError> {
        let side = self.side_path();

        let result = self.write_verified(&side, text, expected).and_then(|()| {
            fs::rename(&side, &self.path).map_err(|source| LedgerError::Replace {
                path: self.path.clone(),
                source,
            })
        });

        if result.is_err() {
            if let Err(err) = fs::remove_file(&side) {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!(path = %side.display(), error = %err, "could not remove ledger side file");
                }
            }
        }

        result
    }

    fn write_verified(&self, side: &Path, text: &str, expected: usize) -> Result<(), LedgerError> {
        fs::write(side, text).map_err(|source| LedgerError::Write {
            path: side.to_path_buf(),
            source,
        })?;

        let written = fs::read_to_string(side).map_err(|source| LedgerError::Write {
            path: side.to_path_buf(),
            source,
        })?;

        let found = count_table_rows(&written);
        if found != expected {
            return Err(LedgerError::Verification {
                path: side.to_path_buf(),
                found,
                expected,
            });
        }

        Ok(())
    }
}

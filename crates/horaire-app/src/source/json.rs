//! JSON file source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{EventSource, TimetableRow};
use crate::error::{AppError, AppResult};

/// Reads a JSON array of [`TimetableRow`]s from a file.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ## Summary
    /// Decodes rows from any reader.
    ///
    /// ## Errors
    /// Returns [`AppError::Json`] if the input is not a JSON array of rows.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Vec<TimetableRow>> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl EventSource for JsonSource {
    fn rows(&self) -> AppResult<Vec<TimetableRow>> {
        let file = File::open(&self.path).map_err(|source| AppError::Io {
            path: self.path.clone(),
            source,
        })?;

        let rows = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(rows = rows.len(), path = %self.path.display(), "Timetable rows read");
        Ok(rows)
    }
}

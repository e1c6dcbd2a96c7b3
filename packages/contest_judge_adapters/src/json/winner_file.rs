use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use contest_judge::{
    model::WinnerRecord,
    ports::{
        errors::{WinnerSinkError, WinnerSinkErrorKind},
        WinnerSink,
    },
};
use log::debug;

/// Writes winners as JSON lines. `reset` truncates the file and each `write` appends one line,
/// so a failed write never shows up in the file later.
pub struct JsonFileWinnerSink {
    path: PathBuf,
}

impl JsonFileWinnerSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileWinnerSink { path: path.into() }
    }

    fn io_error(&self, kind: WinnerSinkErrorKind, error: std::io::Error) -> WinnerSinkError {
        WinnerSinkError {
            kind,
            reason: error.to_string(),
            data: Some(self.path.display().to_string()),
        }
    }
}

impl WinnerSink for JsonFileWinnerSink {
    fn reset(&mut self) -> Result<(), WinnerSinkError> {
        fs::write(&self.path, b"").map_err(|e| self.io_error(WinnerSinkErrorKind::Reset, e))
    }

    fn write(&mut self, winner: WinnerRecord) -> Result<(), WinnerSinkError> {
        debug!("Writing winner contestant={} for prize={}", winner.contestant.id, winner.prize.id);

        let mut line = serde_json::to_vec(&winner).map_err(|e| WinnerSinkError {
            kind: WinnerSinkErrorKind::ParseError,
            reason: e.to_string(),
            data: Some(winner.prize.id.clone()),
        })?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(WinnerSinkErrorKind::Write, e))?;
        file.write_all(&line).map_err(|e| self.io_error(WinnerSinkErrorKind::Write, e))
    }
}

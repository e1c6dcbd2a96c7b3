mod contestant_file;
mod prize_file;
mod winner_file;

pub use contestant_file::JsonLinesContestantSource;
pub use prize_file::JsonPrizeSource;
pub use winner_file::JsonFileWinnerSink;

use std::path::Path;

use contest_judge::ports::errors::{SourceError, SourceErrorKind};

pub(crate) fn io_source_error(path: &Path, error: std::io::Error) -> SourceError {
    SourceError {
        kind: SourceErrorKind::Io,
        reason: error.to_string(),
        data: Some(path.display().to_string()),
    }
}

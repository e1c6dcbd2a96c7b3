use std::path::{Path, PathBuf};

use async_trait::async_trait;
use contest_judge::{
    model::Contestant,
    ports::{
        errors::{SourceError, SourceErrorKind},
        ContestantSource,
    },
};
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader, Lines},
};

use super::io_source_error;

/// Streams contestants from a JSON lines file. Blank lines are skipped.
pub struct JsonLinesContestantSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl JsonLinesContestantSource {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await.map_err(|e| io_source_error(&path, e))?;

        Ok(JsonLinesContestantSource {
            path,
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

#[async_trait]
impl ContestantSource for JsonLinesContestantSource {
    async fn next_contestant(&mut self) -> Result<Option<Contestant>, SourceError> {
        loop {
            let Some(line) = self.lines.next_line().await.map_err(|e| io_source_error(&self.path, e))? else {
                return Ok(None);
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            let contestant = serde_json::from_str::<Contestant>(&line).map_err(|e| SourceError {
                kind: SourceErrorKind::ParseError,
                reason: format!("line {} of {}: {}", self.line_number, self.path.display(), e),
                data: Some(line.clone()),
            })?;

            return Ok(Some(contestant));
        }
    }
}

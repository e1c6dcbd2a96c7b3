use std::path::PathBuf;

use async_trait::async_trait;
use contest_judge::{
    model::Prize,
    ports::{
        errors::{SourceError, SourceErrorKind},
        PrizeSource,
    },
};
use log::debug;

use super::io_source_error;

/// Reads prizes from a file holding a JSON array.
pub struct JsonPrizeSource {
    path: PathBuf,
}

impl JsonPrizeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonPrizeSource { path: path.into() }
    }
}

#[async_trait]
impl PrizeSource for JsonPrizeSource {
    async fn load_prizes(&mut self) -> Result<Vec<Prize>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| io_source_error(&self.path, e))?;

        let prizes: Vec<Prize> = serde_json::from_str(&content).map_err(|e| SourceError {
            kind: SourceErrorKind::ParseError,
            reason: e.to_string(),
            data: Some(self.path.display().to_string()),
        })?;

        debug!("Loaded {} prizes from {}", prizes.len(), self.path.display());
        Ok(prizes)
    }
}

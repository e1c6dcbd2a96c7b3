use async_trait::async_trait;

use super::errors::SourceError;
use crate::model::{Contestant, Prize};

// Implemented by adapters that know where prizes are kept.
#[async_trait]
pub trait PrizeSource {
    async fn load_prizes(&mut self) -> Result<Vec<Prize>, SourceError>;
}

// Implemented by adapters that stream contestant participations to the judge.
// No ordering by participation date is expected.
#[async_trait]
pub trait ContestantSource {
    /// Returns `Ok(None)` once the source is exhausted.
    async fn next_contestant(&mut self) -> Result<Option<Contestant>, SourceError>;
}

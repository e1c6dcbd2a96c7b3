use std::collections::VecDeque;

use async_trait::async_trait;
use contest_judge::{
    model::{Contestant, Prize, WinnerRecord},
    ports::{
        errors::{SourceError, WinnerSinkError},
        ContestantSource, PrizeSource, WinnerSink,
    },
};

#[derive(Debug, Default, Clone)]
pub struct InMemoryPrizeSource {
    prizes: Vec<Prize>,
}

impl InMemoryPrizeSource {
    pub fn new(prizes: Vec<Prize>) -> Self {
        InMemoryPrizeSource { prizes }
    }
}

#[async_trait]
impl PrizeSource for InMemoryPrizeSource {
    async fn load_prizes(&mut self) -> Result<Vec<Prize>, SourceError> {
        Ok(self.prizes.clone())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryContestantSource {
    contestants: VecDeque<Contestant>,
}

impl InMemoryContestantSource {
    pub fn new(contestants: Vec<Contestant>) -> Self {
        InMemoryContestantSource {
            contestants: contestants.into(),
        }
    }
}

#[async_trait]
impl ContestantSource for InMemoryContestantSource {
    async fn next_contestant(&mut self) -> Result<Option<Contestant>, SourceError> {
        Ok(self.contestants.pop_front())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryWinnerSink {
    pub winners: Vec<WinnerRecord>,
    pub resets: usize,
}

impl WinnerSink for InMemoryWinnerSink {
    fn reset(&mut self) -> Result<(), WinnerSinkError> {
        self.resets += 1;
        self.winners.clear();
        Ok(())
    }

    fn write(&mut self, winner: WinnerRecord) -> Result<(), WinnerSinkError> {
        self.winners.push(winner);
        Ok(())
    }
}

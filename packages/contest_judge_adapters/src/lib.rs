// file exports
pub mod json;
pub use json::{JsonFileWinnerSink, JsonLinesContestantSource, JsonPrizeSource};

// in-memory implementations
mod memory;
pub use memory::{InMemoryContestantSource, InMemoryPrizeSource, InMemoryWinnerSink};

mod runner;
pub use runner::run_judging;

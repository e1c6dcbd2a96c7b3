mod source;
mod winner_sink;

pub mod errors;

pub use source::{ContestantSource, PrizeSource};
pub use winner_sink::WinnerSink;

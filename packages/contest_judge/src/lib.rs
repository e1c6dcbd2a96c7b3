pub mod config;
pub mod errors;
pub mod judge;
pub mod model;
pub mod ports;

pub use judge::{CandidateEntry, CandidateTracker, FinalizeSummary, Judge, JudgingSession};
pub use model::{Contestant, Participant, Prize, WinnerRecord};

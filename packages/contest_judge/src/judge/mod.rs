mod candidates;
mod session;

pub use candidates::{CandidateEntry, CandidateTracker};
pub use session::{FinalizeSummary, Judge, JudgingSession};

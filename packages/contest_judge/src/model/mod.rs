mod contestant;
mod prize;
mod winner;

pub use contestant::{Contestant, Participant};
pub use prize::Prize;
pub use winner::WinnerRecord;

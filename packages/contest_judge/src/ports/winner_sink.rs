use super::errors::WinnerSinkError;
use crate::model::{Contestant, WinnerRecord};

/// Destination of the winners produced when a judging session is finalized.
///
/// Calls are synchronous and may block on I/O. Async callers invoke the sink once, after the
/// contestant stream is drained.
pub trait WinnerSink<C = Contestant> {
    /// Discards previously written winners. Must be safe to call when nothing was written.
    fn reset(&mut self) -> Result<(), WinnerSinkError>;
    fn write(&mut self, winner: WinnerRecord<C>) -> Result<(), WinnerSinkError>;
}

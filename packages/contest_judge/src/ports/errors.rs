use thiserror::Error as ThisError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SourceErrorKind {
    Io,
    ParseError,
}

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
#[error("Source Error kind={kind:?} reason={reason} data={data:?} ")]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub reason: String,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum WinnerSinkErrorKind {
    Reset,
    Write,
    ParseError,
}

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
#[error("Winner Sink Error kind={kind:?} reason={reason} data={data:?} ")]
pub struct WinnerSinkError {
    pub kind: WinnerSinkErrorKind,
    pub reason: String,
    pub data: Option<String>,
}

use std::fmt;

pub type ExchangeId = u64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    FileRead,
    UnsupportedFileType { extension: String },
    TooLarge { max_bytes: u64, actual: u64 },
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::FileRead => write!(f, "failed to read resume file"),
            FailureKind::UnsupportedFileType { extension } => {
                write!(f, "unsupported resume file type .{extension}")
            }
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "resume too large (max {max_bytes}, actual {actual})")
            }
            FailureKind::InvalidUrl => write!(f, "invalid endpoint url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Resume upload completed, successfully or not.
    UploadFinished {
        result: Result<Vec<String>, ApiError>,
    },
    /// A chat exchange completed, successfully or not.
    ChatFinished {
        exchange: ExchangeId,
        result: Result<String, ApiError>,
    },
}

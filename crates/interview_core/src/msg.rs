#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the resume path input box.
    ResumeInputChanged(String),
    /// User committed the current path input as the selected resume.
    ResumeSubmitted,
    /// User asked to upload the selected resume.
    UploadRequested,
    /// Engine delivered the extracted keywords for the last upload.
    UploadSucceeded { keywords: Vec<String> },
    /// Engine reported the last upload as failed.
    UploadFailed { message: String },
    /// User edited the chat composition box.
    ComposerChanged(String),
    /// User submitted the current composer text as a chat message.
    MessageSubmitted,
    /// Engine delivered the assistant reply for an exchange.
    ReplyReceived {
        exchange: crate::ExchangeId,
        reply: String,
    },
    /// Engine reported an exchange as failed.
    ReplyFailed {
        exchange: crate::ExchangeId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

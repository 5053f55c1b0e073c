use crate::{ExchangeId, Role, UploadPhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: UploadPhase,
    pub resume_input: String,
    pub resume_name: Option<String>,
    pub uploading: bool,
    pub upload_error: Option<String>,
    pub keywords: Vec<String>,
    /// Chat panel visibility; holds exactly when the keyword set is non-empty.
    pub chat_open: bool,
    pub composer: String,
    pub transcript: Vec<TranscriptRowView>,
    pub awaiting_replies: usize,
    pub chat_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRowView {
    pub exchange: ExchangeId,
    pub role: Role,
    pub content: String,
    pub awaiting_reply: bool,
}

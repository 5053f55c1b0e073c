use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the selected file and post it to the keyword-extraction endpoint.
    UploadResume { path: PathBuf },
    /// Send a chat message with the keyword context captured at send time.
    SendChat {
        exchange: crate::ExchangeId,
        message: String,
        keywords: Vec<String>,
    },
}

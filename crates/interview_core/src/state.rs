use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::view_model::{AppViewModel, TranscriptRowView};

/// Correlation id for one chat exchange (user message plus assistant reply).
pub type ExchangeId = u64;

/// Upload lifecycle for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    KeywordsReady,
    UploadFailed,
}

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub exchange: ExchangeId,
    pub role: Role,
    pub content: String,
}

/// The committed resume choice. Replaced on re-selection, never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedResume {
    pub path: PathBuf,
    pub file_name: String,
}

impl SelectedResume {
    fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, file_name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    resume_input: String,
    resume: Option<SelectedResume>,
    phase: UploadPhase,
    keywords: Vec<String>,
    upload_error: Option<String>,
    composer: String,
    transcript: Vec<TranscriptEntry>,
    pending: BTreeSet<ExchangeId>,
    chat_error: Option<String>,
    next_exchange: ExchangeId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            resume_input: self.resume_input.clone(),
            resume_name: self.resume.as_ref().map(|resume| resume.file_name.clone()),
            uploading: self.phase == UploadPhase::Uploading,
            upload_error: self.upload_error.clone(),
            keywords: self.keywords.clone(),
            chat_open: !self.keywords.is_empty(),
            composer: self.composer.clone(),
            transcript: self
                .transcript
                .iter()
                .map(|entry| TranscriptRowView {
                    exchange: entry.exchange,
                    role: entry.role,
                    content: entry.content.clone(),
                    awaiting_reply: entry.role == Role::User
                        && self.pending.contains(&entry.exchange),
                })
                .collect(),
            awaiting_replies: self.pending.len(),
            chat_error: self.chat_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn resume_input(&self) -> &str {
        &self.resume_input
    }

    pub(crate) fn resume(&self) -> Option<&SelectedResume> {
        self.resume.as_ref()
    }

    pub(crate) fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub(crate) fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub(crate) fn composer(&self) -> &str {
        &self.composer
    }

    pub(crate) fn set_resume_input(&mut self, text: String) {
        if self.resume_input != text {
            self.resume_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn select_resume(&mut self, path: PathBuf) {
        self.resume = Some(SelectedResume::from_path(path));
        // Picking a new file does not cancel an in-flight upload.
        if self.phase != UploadPhase::Uploading {
            self.phase = UploadPhase::FileSelected;
        }
        self.dirty = true;
    }

    pub(crate) fn begin_upload(&mut self) {
        self.phase = UploadPhase::Uploading;
        self.upload_error = None;
        self.dirty = true;
    }

    pub(crate) fn reject_upload(&mut self, message: impl Into<String>) {
        self.upload_error = Some(message.into());
        self.dirty = true;
    }

    pub(crate) fn apply_keywords(&mut self, keywords: Vec<String>) {
        self.phase = UploadPhase::KeywordsReady;
        self.keywords = keywords;
        self.upload_error = None;
        self.dirty = true;
    }

    pub(crate) fn fail_upload(&mut self, message: String) {
        self.phase = UploadPhase::UploadFailed;
        self.upload_error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn set_composer(&mut self, text: String) {
        if self.composer != text {
            self.composer = text;
            self.dirty = true;
        }
    }

    /// Appends the user entry for a new exchange and returns its id.
    pub(crate) fn begin_exchange(&mut self, content: String) -> ExchangeId {
        self.next_exchange += 1;
        let exchange = self.next_exchange;
        self.transcript.push(TranscriptEntry {
            exchange,
            role: Role::User,
            content,
        });
        self.pending.insert(exchange);
        self.chat_error = None;
        self.dirty = true;
        exchange
    }

    /// Inserts the assistant reply directly after the user entry with the
    /// same exchange id, so late replies land next to their question even
    /// when other exchanges completed first. Unknown ids are ignored.
    pub(crate) fn apply_reply(&mut self, exchange: ExchangeId, reply: String) -> bool {
        if !self.pending.remove(&exchange) {
            return false;
        }
        let entry = TranscriptEntry {
            exchange,
            role: Role::Assistant,
            content: reply,
        };
        let anchor = self
            .transcript
            .iter()
            .position(|existing| existing.exchange == exchange && existing.role == Role::User);
        match anchor {
            Some(index) => self.transcript.insert(index + 1, entry),
            None => self.transcript.push(entry),
        }
        self.composer.clear();
        self.chat_error = None;
        self.dirty = true;
        true
    }

    /// Records a failed exchange: the user entry stays, no assistant entry is
    /// added, and the composer keeps its text so the send can be retried.
    pub(crate) fn fail_exchange(&mut self, exchange: ExchangeId, message: String) -> bool {
        if !self.pending.remove(&exchange) {
            return false;
        }
        self.chat_error = Some(message);
        self.dirty = true;
        true
    }
}

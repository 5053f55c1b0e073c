use std::path::PathBuf;

use crate::{AppState, Effect, Msg, UploadPhase};

/// Shown when an upload is requested before any resume has been committed.
pub const NO_RESUME_MESSAGE: &str = "Select a resume file before uploading";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ResumeInputChanged(text) => {
            state.set_resume_input(text);
            Vec::new()
        }
        Msg::ResumeSubmitted => {
            let trimmed = state.resume_input().trim().to_owned();
            if trimmed.is_empty() {
                return (state, Vec::new());
            }
            state.select_resume(PathBuf::from(trimmed));
            Vec::new()
        }
        Msg::UploadRequested => {
            // Only one upload may be in flight; repeat requests are dropped.
            if state.phase() == UploadPhase::Uploading {
                return (state, Vec::new());
            }
            match state.resume() {
                None => {
                    state.reject_upload(NO_RESUME_MESSAGE);
                    Vec::new()
                }
                Some(resume) => {
                    let path = resume.path.clone();
                    state.begin_upload();
                    vec![Effect::UploadResume { path }]
                }
            }
        }
        Msg::UploadSucceeded { keywords } => {
            state.apply_keywords(keywords);
            Vec::new()
        }
        Msg::UploadFailed { message } => {
            state.fail_upload(message);
            Vec::new()
        }
        Msg::ComposerChanged(text) => {
            state.set_composer(text);
            Vec::new()
        }
        Msg::MessageSubmitted => {
            let message = state.composer().trim().to_owned();
            // Empty sends are silent no-ops; chat is locked until keywords arrive.
            if message.is_empty() || state.keywords().is_empty() {
                return (state, Vec::new());
            }
            let keywords = state.keywords().to_vec();
            let exchange = state.begin_exchange(message.clone());
            vec![Effect::SendChat {
                exchange,
                message,
                keywords,
            }]
        }
        Msg::ReplyReceived { exchange, reply } => {
            state.apply_reply(exchange, reply);
            Vec::new()
        }
        Msg::ReplyFailed { exchange, message } => {
            state.fail_exchange(exchange, message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

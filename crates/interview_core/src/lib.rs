//! Interview core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, ExchangeId, Role, SelectedResume, TranscriptEntry, UploadPhase};
pub use update::{update, NO_RESUME_MESSAGE};
pub use view_model::{AppViewModel, TranscriptRowView};

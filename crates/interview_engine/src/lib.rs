//! Interview engine: backend API calls and effect execution.
mod api;
mod engine;
mod resume;
mod types;

pub use api::{ApiSettings, InterviewApi, ReqwestApi, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use resume::{load_resume, ResumePayload};
pub use types::{ApiError, EngineEvent, ExchangeId, FailureKind};

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use interview_core::{Effect, Msg};
use interview_engine::{ApiSettings, EngineEvent, EngineHandle};
use url::Url;

/// Static user-visible failure messages; the detailed error goes to the log.
pub const UPLOAD_ERROR_TEXT: &str = "Error uploading the resume";
pub const CHAT_ERROR_TEXT: &str = "The interviewer did not respond; try sending again";

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings_from_env());
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadResume { path } => {
                    client_info!("UploadResume path={}", path.display());
                    self.engine.upload(path);
                }
                Effect::SendChat {
                    exchange,
                    message,
                    keywords,
                } => {
                    client_info!(
                        "SendChat exchange={} message_len={} keywords={}",
                        exchange,
                        message.len(),
                        keywords.len()
                    );
                    self.engine.send_chat(exchange, message, keywords);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::UploadFinished { result } => match result {
                        Ok(keywords) => Msg::UploadSucceeded { keywords },
                        Err(err) => {
                            client_warn!("resume upload failed: {}", err);
                            Msg::UploadFailed {
                                message: UPLOAD_ERROR_TEXT.to_string(),
                            }
                        }
                    },
                    EngineEvent::ChatFinished { exchange, result } => match result {
                        Ok(reply) => Msg::ReplyReceived { exchange, reply },
                        Err(err) => {
                            client_warn!("chat exchange {} failed: {}", exchange, err);
                            Msg::ReplyFailed {
                                exchange,
                                message: CHAT_ERROR_TEXT.to_string(),
                            }
                        }
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// The base URL may be overridden with `INTERVIEW_API_BASE`; anything
/// unparsable falls back to the default deployment.
fn settings_from_env() -> ApiSettings {
    let mut settings = ApiSettings::default();
    if let Ok(base) = std::env::var("INTERVIEW_API_BASE") {
        match Url::parse(&base) {
            Ok(url) => settings.base_url = url,
            Err(err) => {
                client_warn!("ignoring INTERVIEW_API_BASE {:?}: {}", base, err);
            }
        }
    }
    settings
}

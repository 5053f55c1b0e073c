use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::api::{ApiSettings, InterviewApi, ReqwestApi};
use crate::resume::load_resume;
use crate::{EngineEvent, ExchangeId};

enum EngineCommand {
    UploadResume {
        path: PathBuf,
    },
    SendChat {
        exchange: ExchangeId,
        message: String,
        keywords: Vec<String>,
    },
}

/// Handle to the background IO loop. Commands are fire-and-forget; results
/// come back as [`EngineEvent`]s drained with `try_recv` from the UI side.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let api = Arc::new(ReqwestApi::new(settings).expect("http client"));
            // Each command runs as its own task: an upload and any number of
            // chat sends may be in flight at once, completing in any order.
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn upload(&self, path: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::UploadResume { path: path.into() });
    }

    pub fn send_chat(
        &self,
        exchange: ExchangeId,
        message: impl Into<String>,
        keywords: Vec<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::SendChat {
            exchange,
            message: message.into(),
            keywords,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|event_rx| event_rx.try_recv().ok())
    }
}

async fn handle_command(
    api: &ReqwestApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::UploadResume { path } => {
            let result = match load_resume(&path, api.settings()) {
                Ok(payload) => api.upload_resume(&payload).await,
                Err(err) => Err(err),
            };
            let _ = event_tx.send(EngineEvent::UploadFinished { result });
        }
        EngineCommand::SendChat {
            exchange,
            message,
            keywords,
        } => {
            let result = api.send_chat(&message, &keywords).await;
            let _ = event_tx.send(EngineEvent::ChatFinished { exchange, result });
        }
    }
}

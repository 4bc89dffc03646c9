use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_logging::{finder_debug, finder_error, finder_trace};

use crate::client::{ClientSettings, RecipeClient, ReqwestRecipeClient};
use crate::{ClientError, EngineEvent, FailureKind, RequestId, SearchRequest};

#[derive(Debug)]
enum EngineCommand {
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    Detail {
        request_id: RequestId,
        data_structure: String,
        recipe_name: String,
    },
}

impl EngineCommand {
    /// The completion reported when this command cannot be carried out.
    fn failed(&self, reason: &str) -> EngineEvent {
        let error = ClientError::new(FailureKind::Network, reason);
        match self {
            EngineCommand::Search { request_id, .. } => EngineEvent::SearchCompleted {
                request_id: *request_id,
                result: Err(error),
            },
            EngineCommand::Detail { request_id, .. } => EngineEvent::DetailCompleted {
                request_id: *request_id,
                result: Err(error),
            },
        }
    }
}

/// Runs requests on a background tokio runtime and hands back completions.
///
/// Requests are never cancelled; every enqueued command produces exactly one
/// event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        Self::with_client(Arc::new(ReqwestRecipeClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn RecipeClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    finder_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, &event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                finder_trace!("engine received {:?}", command);
                let client = client.clone();
                let event_tx = event_tx.clone();
                let fallback = command.failed("request task aborted");
                runtime.spawn(async move {
                    let task =
                        tokio::spawn(async move { handle_command(client.as_ref(), command).await });
                    let event = match task.await {
                        Ok(event) => event,
                        Err(err) => {
                            finder_error!(
                                "Request {} task failed: {}",
                                fallback.request_id(),
                                err
                            );
                            fallback
                        }
                    };
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, request_id: RequestId, request: SearchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            request,
        });
    }

    pub fn fetch_detail(
        &self,
        request_id: RequestId,
        data_structure: impl Into<String>,
        recipe_name: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Detail {
            request_id,
            data_structure: data_structure.into(),
            recipe_name: recipe_name.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(client: &dyn RecipeClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search {
            request_id,
            request,
        } => {
            let result = client.search(&request).await;
            finder_debug!("search {} finished ok={}", request_id, result.is_ok());
            EngineEvent::SearchCompleted { request_id, result }
        }
        EngineCommand::Detail {
            request_id,
            data_structure,
            recipe_name,
        } => {
            let result = client.recipe_detail(&data_structure, &recipe_name).await;
            finder_debug!("detail {} finished ok={}", request_id, result.is_ok());
            EngineEvent::DetailCompleted { request_id, result }
        }
    }
}

/// Answers every command with a failure so callers never wait forever.
fn fail_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: &mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    let reason = format!("engine unavailable: {reason}");
    while let Ok(command) = cmd_rx.recv() {
        let _ = event_tx.send(command.failed(&reason));
    }
}

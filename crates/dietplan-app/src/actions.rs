//! Action handlers: UpdateAction dispatch and background request tasks

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dietplan_api::DietApi;
use dietplan_core::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::state::RequestId;
use crate::UpdateAction;

/// Kind of backend request; at most one task per kind runs at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    DietPlan,
    Nutrition,
}

/// Registry of in-flight request tasks
///
/// Spawning a request of a kind aborts the previous task of that kind.
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct RequestTasks {
    tasks: Arc<Mutex<HashMap<RequestKind, JoinHandle<()>>>>,
}

impl RequestTasks {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tasks<R>(&self, f: impl FnOnce(&mut HashMap<RequestKind, JoinHandle<()>>) -> R) -> R {
        let mut guard = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Track `handle`, aborting any earlier task of the same kind
    pub fn replace(&self, kind: RequestKind, handle: JoinHandle<()>) {
        if let Some(previous) = self.with_tasks(|tasks| tasks.insert(kind, handle)) {
            if !previous.is_finished() {
                debug!("Aborting superseded {:?} request", kind);
                previous.abort();
            }
        }
    }

    pub fn abort(&self, kind: RequestKind) {
        if let Some(handle) = self.with_tasks(|tasks| tasks.remove(&kind)) {
            handle.abort();
        }
    }

    pub fn abort_all(&self) {
        let handles: Vec<_> = self.with_tasks(|tasks| tasks.drain().collect());
        for (kind, handle) in handles {
            if !handle.is_finished() {
                debug!("Aborting {:?} request on shutdown", kind);
            }
            handle.abort();
        }
    }

    /// Whether a task of this kind is still running
    pub fn is_running(&self, kind: RequestKind) -> bool {
        self.with_tasks(|tasks| tasks.get(&kind).is_some_and(|h| !h.is_finished()))
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    api: &A,
    msg_tx: mpsc::Sender<Message>,
    tasks: &RequestTasks,
) where
    A: DietApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchDietPlan {
            request_id,
            profile,
        } => {
            let api = api.clone();
            let handle = tokio::spawn(async move {
                let message = match api.diet_plan(&profile).await {
                    Ok(plan) => Message::DietPlanReceived { request_id, plan },
                    Err(e) => Message::DietPlanFailed {
                        request_id,
                        error: failure_text(request_id, e),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    warn!("Diet plan response {} dropped, channel closed", request_id);
                }
            });
            tasks.replace(RequestKind::DietPlan, handle);
        }

        UpdateAction::AnalyzeNutrition { request_id, foods } => {
            let api = api.clone();
            let handle = tokio::spawn(async move {
                let message = match api.analyze_nutrition(&foods).await {
                    Ok(result) => Message::NutritionReceived { request_id, result },
                    Err(e) => Message::NutritionFailed {
                        request_id,
                        error: failure_text(request_id, e),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    warn!("Nutrition response {} dropped, channel closed", request_id);
                }
            });
            tasks.replace(RequestKind::Nutrition, handle);
        }

        UpdateAction::CancelRequest(kind) => tasks.abort(kind),
    }
}

/// Log a request failure and return the text shown to the user
fn failure_text(request_id: RequestId, e: Error) -> String {
    if e.is_recoverable() {
        warn!("Request {} failed: {}", request_id, e);
    } else {
        error!("Request {} failed unexpectedly: {:?}", request_id, e);
    }
    e.to_string()
}

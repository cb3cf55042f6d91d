//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and dispatches the resulting actions.

use dietplan_api::DietApi;
use tokio::sync::mpsc;

use crate::actions::{handle_action, RequestTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &A,
    tasks: &RequestTasks,
) where
    A: DietApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx.clone(), tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }

    if state.should_quit() {
        tasks.abort_all();
    }
}

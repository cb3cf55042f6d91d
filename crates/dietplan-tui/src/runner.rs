//! Main TUI runner - entry point and event loop

use std::time::Instant;

use dietplan_api::DietApi;
use dietplan_app::config::Settings;
use dietplan_app::message::Message;
use dietplan_app::process::process_message;
use dietplan_app::signals;
use dietplan_app::{AppState, RequestTasks};
use dietplan_core::prelude::*;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use super::{event, render, terminal};

/// Run the TUI against `api` until the user quits
pub async fn run<A>(settings: &Settings, api: A) -> Result<()>
where
    A: DietApi + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let key_releases = terminal::enable_key_release_events();

    let mut state = AppState::with_settings(settings);
    debug!(
        "TUI started (animations {}, key releases {})",
        state.ui.animations, key_releases
    );

    // Unified message channel: request completions and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let tasks = RequestTasks::new();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api, &tasks);

    tasks.abort_all();
    if key_releases {
        terminal::disable_key_release_events();
    }
    ratatui::restore();

    info!("Diet Planner exiting");
    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &A,
    tasks: &RequestTasks,
) -> Result<()>
where
    A: DietApi + Clone + Send + Sync + 'static,
{
    let mut clock = event::TickClock::new(Instant::now());

    while !state.should_quit() {
        // Request completions, signals
        loop {
            match msg_rx.try_recv() {
                Ok(msg) => process_message(state, msg, &msg_tx, api, tasks),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Err(Error::ChannelClosed),
            }
        }

        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        for message in event::poll(&mut clock).context("Terminal event poll failed")? {
            process_message(state, message, &msg_tx, api, tasks);
        }
    }

    Ok(())
}

//! Diet Planner - A terminal client for the diet-plan and nutrition API
//!
//! This is the binary entry point. It resolves settings, validates the
//! backend configuration and hands over to the TUI.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use dietplan_api::HttpDietApi;
use dietplan_app::config::{self, Settings};
use dietplan_core::{logging, Error};
use tracing::{error, info};

/// Diet Planner - 7-day diet plans and meal nutrition from the terminal
#[derive(Parser, Debug)]
#[command(name = "dietplan")]
#[command(about = "Generate 7-day diet plans and analyze meal nutrition", long_about = None)]
struct Args {
    /// Backend base URL (overrides the settings file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds, 0 waits indefinitely
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Settings file (default: <config dir>/diet-planner/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// CLI flags take precedence over the settings file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.api.timeout_secs = timeout;
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logs go to a file, the terminal belongs to the TUI
    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging unavailable: {}", e);
    }

    let mut settings = config::load_settings(args.config.as_deref());
    args.apply_overrides(&mut settings);
    info!(
        "Backend {} (timeout {}s)",
        settings.api.base_url, settings.api.timeout_secs
    );

    // Fail before taking over the terminal
    let api = HttpDietApi::new(&settings.api.to_api_config())
        .wrap_err("Invalid backend configuration")?;

    if let Err(e) = dietplan_tui::run(&settings, api).await {
        error!("Application error: {:?}", e);
        let summary = exit_summary(&e);
        return Err(e).wrap_err(summary);
    }

    Ok(())
}

/// Headline for the error report printed on exit
fn exit_summary(e: &Error) -> &'static str {
    if e.is_fatal() {
        "Diet Planner could not keep the terminal session running"
    } else {
        "Diet Planner exited with an error"
    }
}

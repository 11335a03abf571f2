//! # irpanel — device control panel CLI
//!
//! Composition root that wires the adapters into the panel controller and
//! runs one action.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file, env vars, flags)
//! - Initialise logging on stderr
//! - Construct the reqwest gateway and one terminal sink per result area
//! - Construct the controller, injecting gateway, form and sinks
//! - Run the requested action and map an error-tone result to a failing exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use irpanel_adapter_http_reqwest::ReqwestGateway;
use irpanel_app::services::panel_controller::PanelController;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::terminal::TerminalSink;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config, cli.base_url.as_deref())
        .context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    // Wiring
    let gateway = ReqwestGateway::new(&config.device)?;
    tracing::debug!(base_url = %gateway.base_url(), "device gateway ready");
    let controller = PanelController::new(
        gateway,
        cli.ir_form(),
        TerminalSink::stdout("temperature"),
        TerminalSink::stdout("aircon"),
    );

    let view = match cli.command {
        None => controller.load().await,
        Some(Command::Temp) => controller.fetch_temperature().await,
        Some(Command::Ir { .. }) => controller.submit_ir_command().await,
    };

    Ok(if view.tone.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

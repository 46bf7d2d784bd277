//! # z407ctl — terminal control panel
//!
//! The same panel as the browser page, for a terminal: `watch` polls the
//! daemon and prints every status change, `call` fires one action.

mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::time::MissedTickBehavior;
use tracing::Level;

use z407_adapter_http_reqwest::PanelClient;
use z407_app::ports::{ActionSink, Notifier, PanelRenderer, StatusSource};
use z407_app::services::action_invoker::ActionOutcome;
use z407_app::services::panel_context::PanelContext;
use z407_domain::action::ActionEndpoint;
use z407_domain::panel::Indicator;

use crate::terminal::{StderrNotifier, TerminalRenderer};

#[derive(Parser)]
#[command(name = "z407ctl")]
#[command(about = "Control a Z407 speaker through z407d")]
struct Args {
    /// Base URL of the daemon
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Log level
    #[arg(short, long, default_value = "warn", value_parser = clap::value_parser!(Level))]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the status and print it
    Watch {
        /// Poll once and exit
        #[arg(long)]
        once: bool,
    },

    /// Fire one action (e.g. `volume-up`, `/input-aux`)
    Call {
        /// Action endpoint, with or without the leading `/`
        endpoint: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let client = PanelClient::new(&args.url)
        .with_context(|| format!("cannot build a client for {}", args.url))?;
    let panel = PanelContext::new(client, TerminalRenderer::stdout(), StderrNotifier);

    match args.command {
        Commands::Watch { once: true } => {
            let state = panel.check_status().await;
            Ok(exit_code(state.indicator == Indicator::Connected))
        }
        Commands::Watch { once: false } => {
            watch(&panel).await;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Call { endpoint } => {
            let endpoint = ActionEndpoint::new(&endpoint)
                .with_context(|| format!("invalid endpoint {endpoint:?}"))?;
            let outcome = panel.call_action(&endpoint).await;
            Ok(exit_code(matches!(
                outcome,
                ActionOutcome::Completed | ActionOutcome::Refreshed(_)
            )))
        }
    }
}

/// Poll until interrupted.
async fn watch<C, R, N>(panel: &PanelContext<C, R, N>)
where
    C: StatusSource + ActionSink,
    R: PanelRenderer,
    N: Notifier,
{
    let mut interval = tokio::time::interval(panel.poll_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                panel.check_status().await;
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::error!(%err, "failed to listen for ctrl-c");
                }
                break;
            }
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

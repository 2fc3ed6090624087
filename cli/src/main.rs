//! stampflow — headless driver for the alternate-signer verification flow.
//!
//! Plays the host role: supplies the session address, runs one attempt
//! against a configured verifier service, renders the selected view to
//! stdout, and closes the flow before exit.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use stampflow_client::{SignerClient, VerifierConfig};
use stampflow_flow::{AttemptDriver, FlowController, FlowView};
use stampflow_types::WalletAddress;

#[derive(Parser)]
#[command(
    name = "stampflow",
    about = "Attempt stamp verification against an additional wallet address"
)]
struct Cli {
    /// Wallet address active in the current session.
    /// Omit to run with no active session address.
    #[arg(long, env = "STAMPFLOW_ADDRESS")]
    address: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "STAMPFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the verifier service.
    #[arg(long, env = "STAMPFLOW_VERIFIER_URL")]
    verifier_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "STAMPFLOW_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stampflow_utils::init_tracing(&cli.log_level);

    let mut config = match cli.config {
        Some(ref path) => VerifierConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => VerifierConfig::default(),
    };
    if let Some(url) = cli.verifier_url {
        config.verifier_url = url;
    }

    let session_address = cli
        .address
        .as_deref()
        .map(WalletAddress::parse)
        .transpose()
        .context("invalid --address")?;

    let driver = AttemptDriver::new(SignerClient::new(&config)?);
    let mut flow = FlowController::new(session_address, || {
        tracing::info!("verification flow closed");
    });

    let outcome = driver.run_attempt(&mut flow).await;

    match flow.view() {
        FlowView::Confirmation { signer } => {
            println!("additional signer verified: {}", signer.signer);
            println!("challenge: {}", signer.challenge);
        }
        FlowView::Prompt { .. } => match &outcome {
            Err(err) => println!("no additional signer verified: {err}"),
            Ok(()) => println!("no additional signer verified"),
        },
    }

    flow.request_close();
    outcome.map_err(Into::into)
}

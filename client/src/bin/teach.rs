//! Command-line client for the AI Tutor service
//!
//! Usage: `teach <topic...>`
//! Reads `TUTOR_API_URL` / `TUTOR_REQUEST_TIMEOUT_SECS` from the environment.

use ai_tutor_client::{Config, RequestOrchestrator, RequestState};
use anyhow::bail;
use std::env;
use tokio::runtime::Handle;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let topic = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if topic.trim().is_empty() {
        bail!("usage: teach <topic...>");
    }

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let orchestrator = RequestOrchestrator::from_config(&config, Handle::current())?;
    orchestrator.submit(&topic);

    match orchestrator.settled().await {
        RequestState::Success { payload } => {
            println!("{}\n", payload.response.trim());

            if let Some(url) = payload.visual_aid() {
                println!("Visual illustration: {}\n", url);
            }

            let context = ai_tutor_client::parse(&payload.source_data);
            if !context.content.is_empty() {
                println!("Context data:\n{}\n", context.content);
            }
            println!("Source: {}", context.source);
            println!("Region: {}", context.region);
            Ok(())
        }
        RequestState::Failed { message } => bail!(message),
        other => bail!("request ended in unexpected state: {}", other.phase()),
    }
}

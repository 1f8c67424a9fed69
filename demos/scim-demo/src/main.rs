//! Demo driver: list the service principals in a workspace.
//!
//! Credentials come from a `secrets.json` file, with
//! `DATABRICKS_DOMAIN`/`DATABRICKS_TOKEN` as an explicit fallback for
//! anything the file leaves out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use databricks_client::{Client, ClientConfig};
use databricks_scim::ServicePrincipalsEndpoint;

#[derive(Parser, Debug)]
#[command(name = "scim-demo", about = "List service principals in a Databricks workspace")]
struct Args {
    /// Path to the secrets file.
    #[arg(long, default_value = "secrets.json")]
    secrets: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct Secrets {
    domain: Option<String>,
    token: Option<String>,
    workspace_resource_id: Option<String>,
    sp_mgmt_token: Option<String>,
}

fn load_secrets(path: &Path) -> anyhow::Result<Secrets> {
    if !path.exists() {
        return Ok(Secrets::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let secrets = load_secrets(&args.secrets)?;

    let mut config = ClientConfig::new()
        .with_max_retries(3)
        .with_retry_delay(Duration::from_secs(1))
        .with_rate_limit(5);
    config.domain = secrets.domain;
    config.token = secrets.token;
    if let (Some(resource_id), Some(mgmt_token)) =
        (secrets.workspace_resource_id, secrets.sp_mgmt_token)
    {
        config = config.with_azure_headers(resource_id, mgmt_token);
    }

    let client = Client::new(config.with_env_fallback())?;
    let endpoint = ServicePrincipalsEndpoint::new(client);

    println!("Listing service principals");
    let response = endpoint.list().await?;
    println!("{} total", response.total_results);
    for principal in &response.resources {
        println!(
            "{}  {}  application_id={}  active={}",
            principal.id,
            principal.display_name.as_deref().unwrap_or("-"),
            principal.application_id,
            principal.active
        );
    }

    Ok(())
}

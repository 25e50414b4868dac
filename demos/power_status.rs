//! Queries the power state of one machine and prints the finished task as JSON.
//!
//! ```text
//! cargo run --example power_status -- <bmc-host> <user> <pass>
//! ```
//!
//! The PBnJ server address comes from `PBNJ_HOST` / `PBNJ_PORT`
//! (default `localhost:50051`).

use pbnj_client::{PbnjClient, PbnjResult};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> PbnjResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "localhost".to_string());
    let user = args.next().unwrap_or_else(|| "ADMIN".to_string());
    let pass = args.next().unwrap_or_else(|| "ADMIN".to_string());

    let server = env::var("PBNJ_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("PBNJ_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(pbnj_client::DEFAULT_SERVICE_PORT);

    let client = PbnjClient::builder().host(server)?.port(port)?.build()?;

    let mut task = client.request_power_status(&host, &user, &pass).await?;
    let status = task.wait().await?;

    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("could not render status: {}", e),
    }
    if task.failed() {
        eprintln!("task {} failed: {}", task.id(), status.error_message);
    }
    Ok(())
}

use std::sync::Arc;

use comdex::{Comdex, Frequency};
use comdex_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,comdex=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // 1. Build the orchestrator around the deterministic mock connector.
    let comdex = Comdex::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    // 2. Request the copper index for the first half of 2023, daily bars.
    let report = comdex
        .index()
        .keywords(["铜"])
        .frequency(Frequency::D1)
        .begin("2023-01-01")
        .end("2023-06-30")
        .run()
        .await?;

    // 3. Print the composed table.
    println!("columns: {:?}", report.table.columns());
    for (ts, row) in report.table.rows().iter().take(10) {
        println!(" - {ts}  {row:?}");
    }
    if report.table.len() > 10 {
        println!("... and {} more rows", report.table.len() - 10);
    }
    if !report.skipped.is_empty() {
        println!("skipped {} malformed batches", report.skipped.len());
    }

    Ok(())
}

use std::sync::Arc;

use comdex::Comdex;
use comdex_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let comdex = Comdex::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    // The vendor's corn lookup returns the corn-starch contracts too, so both
    // composites get computed; the keyword decides which columns survive.
    for keywords in [vec!["玉米"], vec!["CS"], vec!["玉米", "淀粉"]] {
        let report = comdex
            .index()
            .keywords(keywords.clone())
            .begin("2023-03-01")
            .end("2023-04-28")
            .run()
            .await?;
        println!("{keywords:?} -> columns {:?}", report.table.columns());
        if let Some((ts, row)) = report.table.rows().iter().next_back() {
            println!("   last row {ts}: {row:?}");
        }
    }

    Ok(())
}

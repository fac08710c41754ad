use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::ClinicalRecord;
use crate::ui::cli::args::ProbeArgs;

pub fn predict_url(base: &str) -> String {
    format!("{}/predict", base.trim_end_matches('/'))
}

/// POSTs the reference patient and prints what came back.
pub async fn run_probe(args: &ProbeArgs) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .context("failed to build HTTP client")?;

    let url = predict_url(&args.url);
    let res = client
        .post(&url)
        .json(&ClinicalRecord::reference_patient())
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = res.status();
    let raw = res.text().await.context("failed to read response body")?;

    println!("STATUS: {}", status.as_u16());
    println!("RAW: {raw}");
    match serde_json::from_str::<Value>(&raw) {
        Ok(json) => println!("JSON: {}", serde_json::to_string_pretty(&json)?),
        Err(e) => println!("Could not decode JSON: {e}"),
    }

    Ok(())
}

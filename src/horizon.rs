use anyhow::{Context, Result};
use stellar_wire::{RateLimit, TransactionResponse};

use crate::config::Config;

/// Fetch a transaction record from Horizon and assemble it
pub fn fetch_transaction(config: &Config, hash: &str) -> Result<TransactionResponse> {
    let url = config.transaction_url(hash);
    tracing::info!(%url, network = %config.network_passphrase, "fetching transaction from Horizon");

    let response = reqwest::blocking::get(&url)
        .context("Failed to fetch transaction from Horizon")?;

    let status = response.status();
    if !status.is_success() {
        if status.as_u16() == 404 {
            anyhow::bail!("Transaction {} not found (HTTP 404)", hash);
        } else {
            anyhow::bail!("HTTP error {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown error"));
        }
    }

    let rate_limit = RateLimit::from_headers(
        response
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value))),
    );
    tracing::debug!(
        limit = rate_limit.limit,
        remaining = rate_limit.remaining,
        reset = rate_limit.reset,
        "horizon rate limit"
    );

    let record: serde_json::Value = response.json()
        .context("Failed to parse Horizon response")?;

    let transaction = TransactionResponse::from_json(&record)
        .context("Failed to decode transaction record")?;

    Ok(transaction.with_rate_limit(rate_limit))
}

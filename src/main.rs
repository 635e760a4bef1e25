use anyhow::{Context, Result};
use clap::Parser;
use stellar_wire::{parse_memo, AccountId, Asset, TransactionResponse};

mod cli;
mod config;
mod horizon;

use cli::{Args, LONG_ABOUT};
use config::Config;
use horizon::fetch_transaction;

fn main() -> Result<()> {
    // If no arguments provided, show just the long_about and exit
    if std::env::args().len() == 1 {
        println!("{}", LONG_ABOUT);
        std::process::exit(0);
    }

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    args.validate()?;

    let output = match args.query.as_str() {
        "asset" => asset_query(&args)?,
        "memo" => {
            let record = read_record(&args)?;
            let memo = parse_memo(&record).context("Failed to rebuild memo")?;
            let mut json = serde_json::to_value(&memo)?;
            if let Some(hex) = memo.hex_value() {
                json["memo_hex"] = serde_json::Value::String(hex);
            }
            json
        }
        "transaction" => {
            let transaction = match &args.hash {
                Some(hash) => {
                    let config = if args.testnet { Config::testnet() } else { Config::default() };
                    fetch_transaction(&config, hash)?
                }
                None => TransactionResponse::from_json(&read_record(&args)?)
                    .context("Failed to decode transaction record")?,
            };
            check_envelope(&transaction);
            serde_json::to_value(&transaction)?
        }
        _ => unreachable!("query type checked by Args::validate"),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Decode `--xdr`, or encode `--code`/`--issuer`
fn asset_query(args: &Args) -> Result<serde_json::Value> {
    let asset = match (&args.xdr, &args.code) {
        (Some(xdr), _) => Asset::decode_base64(xdr).context("Failed to decode asset XDR")?,
        (None, Some(code)) if code == "native" => Asset::native(),
        (None, Some(code)) => {
            let issuer = args.issuer.as_deref().unwrap_or_default();
            let issuer: AccountId = issuer.parse().context("Invalid issuer")?;
            Asset::issued(code, issuer).context("Invalid asset")?
        }
        (None, None) => anyhow::bail!("--xdr or --code is required when using --query asset"),
    };

    let mut json = serde_json::to_value(&asset)?;
    json["canonical"] = serde_json::Value::String(asset.to_string());
    json["xdr"] = serde_json::Value::String(asset.encode_base64()?);
    Ok(json)
}

fn read_record(args: &Args) -> Result<serde_json::Value> {
    let path = args.file.as_ref()
        .ok_or_else(|| anyhow::anyhow!("--file is required for this query type"))?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Warn when the signed envelope disagrees with Horizon's summary fields
fn check_envelope(transaction: &TransactionResponse) {
    match (transaction.envelope_memo(), transaction.envelope_source()) {
        (Ok(memo), Ok(source)) => {
            if memo != transaction.memo {
                tracing::warn!(hash = %transaction.hash, "envelope memo differs from memo_type/memo fields");
            }
            if source != transaction.source_account {
                tracing::debug!(hash = %transaction.hash, %source, "envelope source differs from source_account");
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(hash = %transaction.hash, error = %e, "could not decode envelope_xdr");
        }
    }
}

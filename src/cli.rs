use std::path::PathBuf;

use clap::Parser;

pub const LONG_ABOUT: &str = "Decode Stellar assets and Horizon transactions.\n\
                  Converts asset XDR to and from JSON and rebuilds transaction memos from Horizon records.\n\n\
                  Examples:\n  \
                    stellar-wire --query asset --xdr AAAAAA==\n  \
                    stellar-wire --query asset --code USDC --issuer GA5Z...\n  \
                    stellar-wire --query memo --file tx.json\n  \
                    stellar-wire --query transaction --file tx.json\n  \
                    stellar-wire --query transaction --hash 5c2e4dad... --testnet";

/// Stellar asset XDR and Horizon transaction decoder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Args {
    /// Query type determines what to decode
    ///
    /// Options:
    ///   asset       - Decode asset XDR (--xdr) or encode one (--code/--issuer)
    ///   memo        - Rebuild the memo of a Horizon transaction record (requires --file)
    ///   transaction - Assemble a full transaction response (--file or --hash)
    #[arg(
        short,
        long,
        default_value = "transaction",
        value_name = "TYPE",
        help = "Query type: 'asset', 'memo' or 'transaction'"
    )]
    pub query: String,

    /// Base64 asset XDR to decode
    #[arg(short, long, value_name = "XDR", help = "Base64 encoded asset XDR to decode")]
    pub xdr: Option<String>,

    /// Asset code to encode; `native` for lumens
    #[arg(short, long, value_name = "CODE", help = "Asset code to encode, or 'native'")]
    pub code: Option<String>,

    /// Issuer account (G...) of the asset to encode
    #[arg(short, long, value_name = "ACCOUNT", help = "Issuer account of the asset to encode")]
    pub issuer: Option<String>,

    /// Horizon transaction record saved as JSON
    #[arg(short, long, value_name = "FILE", help = "Path to a Horizon transaction JSON record")]
    pub file: Option<PathBuf>,

    /// Transaction hash to fetch from Horizon
    #[arg(long, value_name = "HASH", help = "Transaction hash to fetch from Horizon")]
    pub hash: Option<String>,

    /// Use the test network Horizon instead of the public one
    #[arg(long, help = "Query the test network")]
    pub testnet: bool,

    /// Log decoding details to stderr
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Validate arguments based on query type
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.query.as_str() {
            "asset" => match (&self.xdr, &self.code) {
                (Some(_), Some(_)) => anyhow::bail!("Use either --xdr or --code with --query asset, not both"),
                (None, None) => anyhow::bail!("--xdr or --code is required when using --query asset"),
                (None, Some(code)) if code != "native" && self.issuer.is_none() => {
                    anyhow::bail!("--issuer is required when encoding a non-native asset")
                }
                _ => {}
            },
            "memo" => {
                if self.file.is_none() {
                    anyhow::bail!("--file is required when using --query memo");
                }
            }
            "transaction" => match (&self.file, &self.hash) {
                (Some(_), Some(_)) => anyhow::bail!("Use either --file or --hash, not both"),
                (None, None) => anyhow::bail!("--file or --hash is required when using --query transaction"),
                (None, Some(hash)) => {
                    if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                        anyhow::bail!("Transaction hash must be 64 hex characters");
                    }
                }
                _ => {}
            },
            _ => {
                anyhow::bail!(
                    "Unsupported query type: {}. Use 'asset', 'memo' or 'transaction'",
                    self.query
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("stellar-wire").chain(args.iter().copied()))
    }

    #[test]
    fn test_asset_args() {
        assert!(parse(&["--query", "asset", "--xdr", "AAAAAA=="]).validate().is_ok());
        assert!(parse(&["--query", "asset", "--code", "native"]).validate().is_ok());
        assert!(parse(&["-q", "asset", "-c", "USD", "-i", "GABC"]).validate().is_ok());

        assert!(parse(&["--query", "asset"]).validate().is_err());
        assert!(parse(&["--query", "asset", "--code", "USD"]).validate().is_err());
        assert!(parse(&["--query", "asset", "--xdr", "AAAAAA==", "--code", "USD"]).validate().is_err());
    }

    #[test]
    fn test_memo_args() {
        assert!(parse(&["--query", "memo", "--file", "tx.json"]).validate().is_ok());
        assert!(parse(&["--query", "memo"]).validate().is_err());
    }

    #[test]
    fn test_transaction_args() {
        let hash = "5c2e4dad596941ef944d72741c8f8f1a4282f8f2f141e81d827f44bf365d626b";
        assert!(parse(&["--file", "tx.json"]).validate().is_ok());
        assert!(parse(&["--hash", hash, "--testnet"]).validate().is_ok());

        assert!(parse(&[]).validate().is_err());
        assert!(parse(&["--hash", "abc"]).validate().is_err());
        assert!(parse(&["--hash", hash, "--file", "tx.json"]).validate().is_err());
    }

    #[test]
    fn test_unknown_query() {
        assert!(parse(&["--query", "ledger"]).validate().is_err());
    }
}

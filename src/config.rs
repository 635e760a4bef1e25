/// Network settings for Horizon lookups
pub struct Config {
    pub network_passphrase: String,
    pub horizon_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network_passphrase: "Public Global Stellar Network ; September 2015".to_string(),
            horizon_url: "https://horizon.stellar.org".to_string(),
        }
    }
}

impl Config {
    /// Settings for the SDF test network
    pub fn testnet() -> Self {
        Config {
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
            horizon_url: "https://horizon-testnet.stellar.org".to_string(),
        }
    }

    /// Horizon URL of a single transaction
    pub fn transaction_url(&self, hash: &str) -> String {
        format!(
            "{}/transactions/{}",
            self.horizon_url.trim_end_matches('/'),
            hash.to_lowercase()
        )
    }
}

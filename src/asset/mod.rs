//! Assets held and traded on the ledger.

pub mod code;
pub mod xdr;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, Result};
use crate::stellar::AccountId;

pub use code::{validate_asset_code, AssetCode, AssetCode12, AssetCode4, CodeWidth};

pub const NATIVE: &str = "native";
pub const CREDIT_ALPHANUM4: &str = "credit_alphanum4";
pub const CREDIT_ALPHANUM12: &str = "credit_alphanum12";

/// A currency unit on the ledger: lumens, or a credit identified by code and issuer.
///
/// Two assets are equal when variant, code (case sensitive) and issuer all match;
/// the derived `Hash` covers the same three parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Asset {
    Native,
    IssuedAsset4 { code: AssetCode4, issuer: AccountId },
    IssuedAsset12 { code: AssetCode12, issuer: AccountId },
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    /// Build a credit asset, choosing the 4 or 12 byte variant from the code length
    pub fn issued(code: &str, issuer: AccountId) -> Result<Self> {
        match CodeWidth::for_code(code) {
            Some(CodeWidth::Four) => Ok(Asset::IssuedAsset4 {
                code: AssetCode4::new(code)?,
                issuer,
            }),
            Some(CodeWidth::Twelve) => Ok(Asset::IssuedAsset12 {
                code: AssetCode12::new(code)?,
                issuer,
            }),
            None => Err(CodecError::Validation {
                code: code.to_string(),
                reason: "must be between 1 and 12 characters".to_string(),
            }),
        }
    }

    /// Build an asset from the `asset_type`, `asset_code` and `asset_issuer`
    /// strings Horizon uses. Code and issuer are ignored for `native`.
    pub fn create(asset_type: &str, code: &str, issuer: &str) -> Result<Self> {
        if asset_type == NATIVE {
            return Ok(Asset::Native);
        }
        let issuer = AccountId::from_strkey(issuer)?;
        Asset::issued(code, issuer)
    }

    pub fn asset_type(&self) -> &'static str {
        match self {
            Asset::Native => NATIVE,
            Asset::IssuedAsset4 { .. } => CREDIT_ALPHANUM4,
            Asset::IssuedAsset12 { .. } => CREDIT_ALPHANUM12,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::IssuedAsset4 { code, .. } => Some(code.as_str()),
            Asset::IssuedAsset12 { code, .. } => Some(code.as_str()),
        }
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::IssuedAsset4 { issuer, .. } | Asset::IssuedAsset12 { issuer, .. } => Some(issuer),
        }
    }
}

/// `native` or `CODE:ISSUER`
impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => f.write_str(NATIVE),
            Asset::IssuedAsset4 { code, issuer } => write!(f, "{}:{}", code, issuer),
            Asset::IssuedAsset12 { code, issuer } => write!(f, "{}:{}", code, issuer),
        }
    }
}

impl FromStr for Asset {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        if s == NATIVE {
            return Ok(Asset::Native);
        }
        let (code, issuer) = s.split_once(':').ok_or_else(|| CodecError::Validation {
            code: s.to_string(),
            reason: "expected 'native' or CODE:ISSUER".to_string(),
        })?;
        Asset::issued(code, AccountId::from_strkey(issuer)?)
    }
}

/// Asset as it appears in Horizon JSON
#[derive(Serialize, Deserialize)]
struct AssetRecord {
    asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset_issuer: Option<String>,
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AssetRecord {
            asset_type: self.asset_type().to_string(),
            asset_code: self.code().map(str::to_string),
            asset_issuer: self.issuer().map(AccountId::to_strkey),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let record = AssetRecord::deserialize(deserializer)?;
        let asset = match record.asset_type.as_str() {
            NATIVE => Asset::Native,
            CREDIT_ALPHANUM4 | CREDIT_ALPHANUM12 => {
                let code = record.asset_code.as_deref().ok_or_else(|| D::Error::missing_field("asset_code"))?;
                let issuer = record.asset_issuer.as_deref().ok_or_else(|| D::Error::missing_field("asset_issuer"))?;
                Asset::create(&record.asset_type, code, issuer).map_err(D::Error::custom)?
            }
            other => {
                return Err(D::Error::unknown_variant(
                    other,
                    &[NATIVE, CREDIT_ALPHANUM4, CREDIT_ALPHANUM12],
                ))
            }
        };

        if asset.asset_type() != record.asset_type {
            return Err(D::Error::custom(format!(
                "asset code length does not match asset_type {}",
                record.asset_type
            )));
        }
        Ok(asset)
    }
}

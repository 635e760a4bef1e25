use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stellar_xdr::curr::{AccountId as XdrAccountId, MuxedAccount, PublicKey, Uint256};

use crate::error::{CodecError, Result};

/// An ed25519 account identity, rendered as a `G...` strkey.
///
/// Only the public key is carried; signing material never passes through this crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a `G...` account strkey
    pub fn from_strkey(account: &str) -> Result<Self> {
        stellar_strkey::ed25519::PublicKey::from_string(account)
            .map(|pk| AccountId(pk.0))
            .map_err(|_| CodecError::InvalidAccountId(account.to_string()))
    }

    pub fn to_strkey(&self) -> String {
        format!("{}", stellar_strkey::ed25519::PublicKey(self.0))
    }

    pub fn to_xdr(&self) -> XdrAccountId {
        XdrAccountId(PublicKey::PublicKeyTypeEd25519(Uint256(self.0)))
    }

    pub fn from_xdr(account: &XdrAccountId) -> Self {
        match &account.0 {
            PublicKey::PublicKeyTypeEd25519(uint256) => AccountId(uint256.0),
        }
    }

    /// Underlying account of a muxed account; the mux id is dropped
    pub fn from_muxed(muxed: &MuxedAccount) -> Self {
        match muxed {
            MuxedAccount::Ed25519(uint256) => AccountId(uint256.0),
            MuxedAccount::MuxedEd25519(med) => AccountId(med.ed25519.0),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_strkey())
    }
}

impl FromStr for AccountId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        AccountId::from_strkey(s)
    }
}

impl From<&XdrAccountId> for AccountId {
    fn from(account: &XdrAccountId) -> Self {
        AccountId::from_xdr(account)
    }
}

impl From<AccountId> for XdrAccountId {
    fn from(account: AccountId) -> Self {
        account.to_xdr()
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_strkey())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let account = String::deserialize(deserializer)?;
        AccountId::from_strkey(&account).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_xdr::curr::MuxedAccountMed25519;

    const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

    #[test]
    fn test_strkey_roundtrip() {
        let account = AccountId::from_strkey(ZERO_ACCOUNT).unwrap();
        assert_eq!(account.as_bytes(), &[0u8; 32]);
        assert_eq!(account.to_string(), ZERO_ACCOUNT);

        let other = AccountId::from_bytes([7u8; 32]);
        assert_eq!(other.to_string().parse::<AccountId>().unwrap(), other);
    }

    #[test]
    fn test_invalid_strkey() {
        assert!(matches!(
            AccountId::from_strkey("GABC"),
            Err(CodecError::InvalidAccountId(_))
        ));
        // Contract strkeys are not accounts
        let contract = format!("{}", stellar_strkey::Contract([1u8; 32]));
        assert!(AccountId::from_strkey(&contract).is_err());
    }

    #[test]
    fn test_xdr_conversion() {
        let account = AccountId::from_bytes([9u8; 32]);
        let xdr = account.to_xdr();
        assert_eq!(AccountId::from_xdr(&xdr), account);
    }

    #[test]
    fn test_from_muxed() {
        let plain = MuxedAccount::Ed25519(Uint256([3u8; 32]));
        assert_eq!(AccountId::from_muxed(&plain), AccountId::from_bytes([3u8; 32]));

        let muxed = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id: 42,
            ed25519: Uint256([4u8; 32]),
        });
        assert_eq!(AccountId::from_muxed(&muxed), AccountId::from_bytes([4u8; 32]));
    }

    #[test]
    fn test_serde_as_strkey() {
        let account = AccountId::from_bytes([0u8; 32]);
        let json = serde_json::to_value(account).unwrap();
        assert_eq!(json, serde_json::json!(ZERO_ACCOUNT));

        let back: AccountId = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);

        let bad: std::result::Result<AccountId, _> = serde_json::from_value(serde_json::json!("nope"));
        assert!(bad.is_err());
    }
}

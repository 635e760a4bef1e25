//! Optional annotation attached to a transaction.

use base64::Engine;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use stellar_xdr::curr::{Hash, Memo as XdrMemo, StringM};

use crate::error::{CodecError, Result};

/// Longest text memo, in UTF-8 bytes
pub const MAX_TEXT_BYTES: usize = 28;
pub const HASH_BYTES: usize = 32;

/// Memo attached to a transaction.
///
/// `ReturnHash` carries the hash of a transaction being refunded; it has the same
/// shape as `Hash` but never compares equal to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Memo {
    #[default]
    None,
    Text(String),
    Id(u64),
    Hash([u8; HASH_BYTES]),
    ReturnHash([u8; HASH_BYTES]),
}

impl Memo {
    pub fn none() -> Self {
        Memo::None
    }

    pub fn text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.len() > MAX_TEXT_BYTES {
            return Err(CodecError::MemoTooLong(format!(
                "text must be <= {} bytes, got {}",
                MAX_TEXT_BYTES,
                text.len()
            )));
        }
        Ok(Memo::Text(text))
    }

    pub fn id(id: u64) -> Self {
        Memo::Id(id)
    }

    /// Hash memo from raw bytes; shorter input is zero-padded to 32 bytes
    pub fn hash(bytes: &[u8]) -> Result<Self> {
        padded_hash(bytes).map(Memo::Hash)
    }

    pub fn return_hash(bytes: &[u8]) -> Result<Self> {
        padded_hash(bytes).map(Memo::ReturnHash)
    }

    /// Hash memo from a hex string, upper or lower case
    pub fn hash_from_hex(hex_string: &str) -> Result<Self> {
        Memo::hash(&decode_hex(hex_string)?)
    }

    pub fn return_hash_from_hex(hex_string: &str) -> Result<Self> {
        Memo::return_hash(&decode_hex(hex_string)?)
    }

    /// Discriminator Horizon uses in `memo_type`
    pub fn memo_type(&self) -> &'static str {
        match self {
            Memo::None => "none",
            Memo::Text(_) => "text",
            Memo::Id(_) => "id",
            Memo::Hash(_) => "hash",
            Memo::ReturnHash(_) => "return",
        }
    }

    pub fn hash_bytes(&self) -> Option<&[u8; HASH_BYTES]> {
        match self {
            Memo::Hash(bytes) | Memo::ReturnHash(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Lower case hex of a hash memo
    pub fn hex_value(&self) -> Option<String> {
        self.hash_bytes().map(hex::encode)
    }

    /// Lower case hex of a hash memo up to its first zero byte
    pub fn trimmed_hex_value(&self) -> Option<String> {
        self.hash_bytes().map(|bytes| {
            let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
            hex::encode(&bytes[..end])
        })
    }

    /// Payload in the string form Horizon puts in the `memo` field
    pub fn horizon_value(&self) -> Option<String> {
        match self {
            Memo::None => None,
            Memo::Text(text) => Some(text.clone()),
            Memo::Id(id) => Some(id.to_string()),
            Memo::Hash(bytes) | Memo::ReturnHash(bytes) => {
                Some(base64::engine::general_purpose::STANDARD.encode(bytes))
            }
        }
    }

    pub fn to_xdr(&self) -> Result<XdrMemo> {
        Ok(match self {
            Memo::None => XdrMemo::None,
            Memo::Text(text) => {
                let text = StringM::<28>::try_from(text.as_str())
                    .map_err(|e| CodecError::MemoTooLong(format!("Invalid memo text: {}", e)))?;
                XdrMemo::Text(text)
            }
            Memo::Id(id) => XdrMemo::Id(*id),
            Memo::Hash(bytes) => XdrMemo::Hash(Hash(*bytes)),
            Memo::ReturnHash(bytes) => XdrMemo::Return(Hash(*bytes)),
        })
    }

    pub fn from_xdr(memo: &XdrMemo) -> Result<Self> {
        Ok(match memo {
            XdrMemo::None => Memo::None,
            XdrMemo::Text(text) => {
                let text = std::str::from_utf8(text.as_vec())
                    .map_err(|e| CodecError::MalformedMemo(format!("memo text is not UTF-8: {}", e)))?;
                Memo::Text(text.to_string())
            }
            XdrMemo::Id(id) => Memo::Id(*id),
            XdrMemo::Hash(hash) => Memo::Hash(hash.0),
            XdrMemo::Return(hash) => Memo::ReturnHash(hash.0),
        })
    }
}

/// Horizon form: `{"memo_type": ..., "memo": ...}`, with `memo` left out for `none`
impl Serialize for Memo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.horizon_value();
        let mut map = serializer.serialize_map(Some(if value.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("memo_type", self.memo_type())?;
        if let Some(value) = value {
            map.serialize_entry("memo", &value)?;
        }
        map.end()
    }
}

fn padded_hash(bytes: &[u8]) -> Result<[u8; HASH_BYTES]> {
    if bytes.len() > HASH_BYTES {
        return Err(CodecError::MemoTooLong(format!(
            "hash memo can contain {} bytes at most, got {}",
            HASH_BYTES,
            bytes.len()
        )));
    }
    let mut buf = [0u8; HASH_BYTES];
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(buf)
}

fn decode_hex(hex_string: &str) -> Result<Vec<u8>> {
    hex::decode(hex_string).map_err(|e| CodecError::MalformedMemo(format!("invalid hex '{}': {}", hex_string, e)))
}

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use stellar_xdr::curr::{FeeBumpTransactionInnerTx, Limits, ReadXdr, TransactionEnvelope};

use super::link::TransactionLinks;
use super::memo::parse_memo;
use super::rate_limit::RateLimit;
use crate::error::{CodecError, Result};
use crate::memo::Memo;
use crate::stellar::AccountId;

/// A transaction as returned by Horizon's `/transactions` endpoints.
///
/// Build one with [`TransactionResponse::from_json`] (or `str::parse`, or serde);
/// all three rebuild the memo from `memo_type` rather than trusting field-by-field
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionResponse {
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<u32>,
    pub created_at: String,
    pub source_account: AccountId,
    pub paging_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_account_sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_paid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_count: Option<u32>,
    pub envelope_xdr: String,
    pub result_xdr: String,
    pub result_meta_xdr: String,
    #[serde(flatten)]
    pub memo: Memo,
    #[serde(rename = "_links")]
    pub links: TransactionLinks,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

/// Everything in the record except the memo, mapped field by field
#[derive(Deserialize)]
struct TransactionRecord {
    hash: String,
    #[serde(default, deserialize_with = "number_or_string")]
    ledger: Option<u32>,
    created_at: String,
    source_account: AccountId,
    paging_token: String,
    #[serde(default, deserialize_with = "number_or_string")]
    source_account_sequence: Option<i64>,
    #[serde(default, deserialize_with = "number_or_string")]
    fee_paid: Option<i64>,
    #[serde(default, deserialize_with = "number_or_string")]
    operation_count: Option<u32>,
    envelope_xdr: String,
    result_xdr: String,
    result_meta_xdr: String,
    #[serde(rename = "_links")]
    links: TransactionLinks,
}

impl TransactionRecord {
    fn with_memo(self, memo: Memo) -> TransactionResponse {
        TransactionResponse {
            hash: self.hash,
            ledger: self.ledger,
            created_at: self.created_at,
            source_account: self.source_account,
            paging_token: self.paging_token,
            source_account_sequence: self.source_account_sequence,
            fee_paid: self.fee_paid,
            operation_count: self.operation_count,
            envelope_xdr: self.envelope_xdr,
            result_xdr: self.result_xdr,
            result_meta_xdr: self.result_meta_xdr,
            memo,
            links: self.links,
            rate_limit: RateLimit::default(),
        }
    }
}

/// Horizon sends 64-bit values as strings; older servers sent numbers
fn number_or_string<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(serde_json::Number),
        String(String),
    }

    let raw = match Option::<NumberOrString>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrString::Number(n)) => n.to_string(),
        Some(NumberOrString::String(s)) => s,
    };
    raw.parse()
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid number '{}': {}", raw, e)))
}

impl TransactionResponse {
    /// Assemble a response from a raw Horizon transaction record.
    pub fn from_json(record: &Value) -> Result<Self> {
        let fields = TransactionRecord::deserialize(record)
            .map_err(|e| CodecError::MalformedRecord(e.to_string()))?;
        let memo = parse_memo(record)?;

        tracing::trace!(hash = %fields.hash, memo_type = memo.memo_type(), "assembled transaction response");
        Ok(fields.with_memo(memo))
    }

    pub fn with_rate_limit(self, rate_limit: RateLimit) -> Self {
        TransactionResponse { rate_limit, ..self }
    }

    /// Decode `envelope_xdr`
    pub fn envelope(&self) -> Result<TransactionEnvelope> {
        TransactionEnvelope::from_xdr_base64(&self.envelope_xdr, Limits::none())
            .map_err(|e| CodecError::MalformedRecord(format!("Failed to decode envelope_xdr: {}", e)))
    }

    /// Source account named inside the envelope; for fee bumps, the fee source
    pub fn envelope_source(&self) -> Result<AccountId> {
        Ok(match self.envelope()? {
            TransactionEnvelope::TxV0(env) => AccountId::from_bytes(env.tx.source_account_ed25519.0),
            TransactionEnvelope::Tx(env) => AccountId::from_muxed(&env.tx.source_account),
            TransactionEnvelope::TxFeeBump(env) => AccountId::from_muxed(&env.tx.fee_source),
        })
    }

    /// Memo as signed in the envelope, for checking against [`memo`](Self::memo)
    pub fn envelope_memo(&self) -> Result<Memo> {
        match self.envelope()? {
            TransactionEnvelope::TxV0(env) => Memo::from_xdr(&env.tx.memo),
            TransactionEnvelope::Tx(env) => Memo::from_xdr(&env.tx.memo),
            TransactionEnvelope::TxFeeBump(env) => match &env.tx.inner_tx {
                FeeBumpTransactionInnerTx::Tx(inner) => Memo::from_xdr(&inner.tx.memo),
            },
        }
    }
}

impl FromStr for TransactionResponse {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let record: Value =
            serde_json::from_str(s).map_err(|e| CodecError::MalformedRecord(e.to_string()))?;
        TransactionResponse::from_json(&record)
    }
}

impl<'de> Deserialize<'de> for TransactionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = Value::deserialize(deserializer)?;
        TransactionResponse::from_json(&record).map_err(serde::de::Error::custom)
    }
}

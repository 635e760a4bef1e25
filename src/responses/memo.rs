use base64::Engine;
use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::memo::{Memo, HASH_BYTES};

/// Rebuild the memo of a Horizon transaction record from `memo_type` and `memo`.
///
/// Horizon leaves `memo` out entirely when a text memo is empty, so a `text`
/// record without it yields `Memo::Text("")`. Every other type except `none`
/// requires the field.
pub fn parse_memo(record: &Value) -> Result<Memo> {
    let memo_type = record
        .get("memo_type")
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingField("memo_type"))?;

    let memo_field = record.get("memo");

    match memo_type {
        "none" => Ok(Memo::None),
        "text" => match memo_string(memo_type, memo_field)? {
            Some(text) => Memo::text(text).map_err(|e| CodecError::MalformedMemo(e.to_string())),
            None => {
                tracing::debug!("text memo without a memo field, using an empty text memo");
                Ok(Memo::Text(String::new()))
            }
        },
        "id" => {
            let value = required(memo_type, memo_field)?;
            value
                .parse::<u64>()
                .map(Memo::Id)
                .map_err(|e| CodecError::MalformedMemo(format!("invalid id memo '{}': {}", value, e)))
        }
        "hash" => decode_hash(memo_type, memo_field).map(Memo::Hash),
        "return" => decode_hash(memo_type, memo_field).map(Memo::ReturnHash),
        other => Err(CodecError::UnknownMemoType(other.to_string())),
    }
}

/// The `memo` field as a string. JSON `null` counts as absent.
fn memo_string<'a>(memo_type: &str, field: Option<&'a Value>) -> Result<Option<&'a str>> {
    match field {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(CodecError::MalformedMemo(format!(
            "{} memo must be a string, got {}",
            memo_type, other
        ))),
    }
}

fn required<'a>(memo_type: &str, field: Option<&'a Value>) -> Result<&'a str> {
    memo_string(memo_type, field)?
        .ok_or_else(|| CodecError::MalformedMemo(format!("{} memo without a memo field", memo_type)))
}

fn decode_hash(memo_type: &str, field: Option<&Value>) -> Result<[u8; HASH_BYTES]> {
    let value = required(memo_type, field)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(value)
        .map_err(|e| CodecError::MalformedMemo(format!("invalid base64 in {} memo: {}", memo_type, e)))?;

    <[u8; HASH_BYTES]>::try_from(bytes.as_slice()).map_err(|_| {
        CodecError::MalformedMemo(format!(
            "{} memo must decode to {} bytes, got {}",
            memo_type,
            HASH_BYTES,
            bytes.len()
        ))
    })
}

//! Stellar assets and memos on the wire.
//!
//! Assets round-trip through canonical XDR; memos are rebuilt from Horizon
//! transaction records, where the payload's shape depends on `memo_type`.

pub mod asset;
pub mod error;
pub mod memo;
pub mod responses;
pub mod stellar;

pub use asset::{Asset, AssetCode, AssetCode12, AssetCode4, CodeWidth};
pub use error::{CodecError, Result};
pub use memo::Memo;
pub use responses::{parse_memo, RateLimit, TransactionResponse};
pub use stellar::AccountId;

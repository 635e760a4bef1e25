//! Horizon response resources.

pub mod link;
pub mod memo;
pub mod rate_limit;
pub mod transaction;

pub use link::{Link, TransactionLinks};
pub use memo::parse_memo;
pub use rate_limit::RateLimit;
pub use transaction::TransactionResponse;

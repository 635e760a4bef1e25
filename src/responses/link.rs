use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// A HAL link from a Horizon resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// Parsed href. Templated links (`...{?cursor,limit,order}`) need expanding
    /// first and are refused.
    pub fn uri(&self) -> Result<Url> {
        if self.templated {
            return Err(CodecError::MalformedRecord(format!(
                "link is templated: {}",
                self.href
            )));
        }
        Url::parse(&self.href)
            .map_err(|e| CodecError::MalformedRecord(format!("invalid link '{}': {}", self.href, e)))
    }
}

/// Links attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLinks {
    pub account: Link,
    pub effects: Link,
    pub ledger: Link,
    pub operations: Link,
    #[serde(rename = "self")]
    pub self_link: Link,
    pub precedes: Link,
    pub succeeds: Link,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        let link: Link = serde_json::from_value(serde_json::json!({
            "href": "https://horizon.stellar.org/ledgers/123"
        }))
        .unwrap();
        assert!(!link.templated);
        assert_eq!(link.uri().unwrap().path(), "/ledgers/123");
    }

    #[test]
    fn test_templated_link() {
        let link = Link {
            href: "https://horizon.stellar.org/transactions/abc/effects{?cursor,limit,order}".to_string(),
            templated: true,
        };
        assert!(matches!(link.uri(), Err(CodecError::MalformedRecord(_))));
    }

    #[test]
    fn test_invalid_href() {
        let link = Link {
            href: "not a url".to_string(),
            templated: false,
        };
        assert!(link.uri().is_err());
    }
}

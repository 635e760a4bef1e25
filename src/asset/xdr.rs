//! Asset <-> XDR.
//!
//! Wire layout: a 4 byte discriminant (native=0, alphanum4=1, alphanum12=2);
//! credit assets follow it with the zero-padded code and the issuer's `AccountId`.

use stellar_xdr::curr::{
    AlphaNum12, AlphaNum4, Asset as XdrAsset, AssetCode12 as XdrAssetCode12,
    AssetCode4 as XdrAssetCode4, Limits, ReadXdr, WriteXdr,
};

use super::{Asset, AssetCode12, AssetCode4};
use crate::error::{CodecError, Result};
use crate::stellar::AccountId;

impl Asset {
    pub fn to_xdr(&self) -> XdrAsset {
        match self {
            Asset::Native => XdrAsset::Native,
            Asset::IssuedAsset4 { code, issuer } => XdrAsset::CreditAlphanum4(AlphaNum4 {
                asset_code: XdrAssetCode4(code.to_padded()),
                issuer: issuer.to_xdr(),
            }),
            Asset::IssuedAsset12 { code, issuer } => XdrAsset::CreditAlphanum12(AlphaNum12 {
                asset_code: XdrAssetCode12(code.to_padded()),
                issuer: issuer.to_xdr(),
            }),
        }
    }

    pub fn from_xdr(xdr: &XdrAsset) -> Result<Self> {
        let malformed = |e: CodecError| CodecError::MalformedAsset(e.to_string());

        match xdr {
            XdrAsset::Native => Ok(Asset::Native),
            XdrAsset::CreditAlphanum4(alpha) => Ok(Asset::IssuedAsset4 {
                code: AssetCode4::from_padded(&alpha.asset_code.0).map_err(malformed)?,
                issuer: AccountId::from_xdr(&alpha.issuer),
            }),
            XdrAsset::CreditAlphanum12(alpha) => Ok(Asset::IssuedAsset12 {
                code: AssetCode12::from_padded(&alpha.asset_code.0).map_err(malformed)?,
                issuer: AccountId::from_xdr(&alpha.issuer),
            }),
        }
    }

    /// Serialize to canonical XDR bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_xdr()
            .to_xdr(Limits::none())
            .map_err(|e| CodecError::MalformedAsset(format!("Failed to encode asset: {}", e)))
    }

    /// Parse canonical XDR bytes. The whole buffer must be consumed.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let xdr = XdrAsset::from_xdr(bytes, Limits::none())
            .map_err(|e| CodecError::MalformedAsset(format!("Failed to decode asset XDR: {}", e)))?;
        Asset::from_xdr(&xdr)
    }

    pub fn encode_base64(&self) -> Result<String> {
        self.to_xdr()
            .to_xdr_base64(Limits::none())
            .map_err(|e| CodecError::MalformedAsset(format!("Failed to encode asset: {}", e)))
    }

    pub fn decode_base64(encoded: &str) -> Result<Self> {
        let xdr = XdrAsset::from_xdr_base64(encoded.trim(), Limits::none())
            .map_err(|e| CodecError::MalformedAsset(format!("Failed to decode asset XDR: {}", e)))?;
        Asset::from_xdr(&xdr)
    }
}

impl From<&Asset> for XdrAsset {
    fn from(asset: &Asset) -> Self {
        asset.to_xdr()
    }
}

impl TryFrom<&XdrAsset> for Asset {
    type Error = CodecError;

    fn try_from(xdr: &XdrAsset) -> Result<Self> {
        Asset::from_xdr(xdr)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_issuer() -> impl Strategy<Value = AccountId> {
        any::<[u8; 32]>().prop_map(AccountId::from_bytes)
    }

    proptest! {
        #[test]
        fn prop_alphanum4_roundtrip(code in "[A-Za-z0-9]{1,4}", issuer in any_issuer()) {
            let asset = Asset::IssuedAsset4 { code: AssetCode4::new(&code).unwrap(), issuer };
            let decoded = Asset::decode(&asset.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, asset);
        }

        #[test]
        fn prop_alphanum12_roundtrip(code in "[A-Za-z0-9]{5,12}", issuer in any_issuer()) {
            let asset = Asset::IssuedAsset12 { code: AssetCode12::new(&code).unwrap(), issuer };
            let decoded = Asset::decode(&asset.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, asset);
        }
    }
}

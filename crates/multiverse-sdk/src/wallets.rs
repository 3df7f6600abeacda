use alloy::{
    network::EthereumWallet,
    signers::local::{LocalSignerError, PrivateKeySigner},
};

use crate::error::SdkError;

/// Parse a signing key into a local signer.
///
/// Keys usually arrive through the `SIGNER_PRIVATE_KEY` env var or a config
/// file, so surrounding whitespace and an optional `0x` prefix are tolerated.
/// The reported length is that of the normalized key; the key material itself
/// never appears in the error.
pub fn signer_from_private_key(private_key: &str) -> Result<PrivateKeySigner, SdkError> {
    let key = private_key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse()
        .map_err(|e: LocalSignerError| SdkError::InvalidPrivateKey {
            key_length: key.len(),
            source: e,
        })
}

pub fn wallet_from_private_key(private_key: &str) -> Result<EthereumWallet, SdkError> {
    Ok(EthereumWallet::from(signer_from_private_key(private_key)?))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const KEY: &str = "449bf49be49946f2160d288a56e820adc5808806d558f33a2412783a61aad3d7";

    #[test]
    fn accepts_prefixed_and_padded_keys() {
        let plain = signer_from_private_key(KEY).unwrap();
        let prefixed = signer_from_private_key(&format!("0x{KEY}")).unwrap();
        let padded = signer_from_private_key(&format!("  {KEY}\n")).unwrap();

        assert_eq!(plain.address(), prefixed.address());
        assert_eq!(plain.address(), padded.address());
    }

    #[test]
    fn rejects_truncated_key_with_normalized_length() {
        let err = signer_from_private_key("0xabcd").unwrap_err();
        assert!(matches!(
            err,
            SdkError::InvalidPrivateKey { key_length: 4, .. }
        ));
    }
}

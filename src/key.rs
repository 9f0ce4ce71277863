use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Result;
use crate::rsa::RsaPublicKey;

/// A single raw key inside a JWKS
///
/// Only the members needed to rebuild an RSA key are kept; anything else in the
/// record is ignored. Nothing is validated when the record is parsed: a missing
/// or malformed `n`/`e` only surfaces when the key is decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonKey {
    #[serde(rename = "kid", default)]
    id: String,
    #[serde(rename = "alg", default)]
    algorithm: String,
    #[serde(rename = "n", default)]
    modulus: Option<String>,
    #[serde(rename = "e", default)]
    exponent: Option<String>,
    /// Set once by the first successful decode, never cleared
    #[serde(skip)]
    decoded: OnceLock<RsaPublicKey>,
}

impl JsonKey {
    /// Key ID (`kid`), empty if the record had none
    pub fn kid(&self) -> &str {
        &self.id
    }

    /// Algorithm tag (`alg`), empty if the record had none
    pub fn alg(&self) -> &str {
        &self.algorithm
    }

    /// Base64url modulus (`n`) as it appeared in the document
    pub fn modulus(&self) -> Option<&str> {
        self.modulus.as_deref()
    }

    /// Base64url exponent (`e`) as it appeared in the document
    pub fn exponent(&self) -> Option<&str> {
        self.exponent.as_deref()
    }

    /// Whether the RSA key has already been decoded and cached
    pub fn is_decoded(&self) -> bool {
        self.decoded.get().is_some()
    }

    /// Decode this record's `n` and `e` into an RSA public key
    ///
    /// The first successful decode is cached on the record and returned by every
    /// later call. Failures are not cached, so a later call decodes again.
    /// The `alg` member is not checked here; [`Keystore::rsa`](crate::Keystore::rsa)
    /// does that before calling this.
    ///
    /// # Errors
    /// Returns `Error::MalformedKeyMaterial` if `n` or `e` cannot be decoded.
    pub fn rsa(&self) -> Result<&RsaPublicKey> {
        if let Some(key) = self.decoded.get() {
            tracing::trace!(kid = %self.id, "rsa key cache hit");
            return Ok(key);
        }

        let key = RsaPublicKey::from_components(
            &self.id,
            self.modulus.as_deref(),
            self.exponent.as_deref(),
        )?;
        tracing::debug!(kid = %self.id, bits = key.bits(), "decoded rsa public key");

        // Concurrent first decodes may race here; the first stored value wins and
        // every caller gets that one.
        Ok(self.decoded.get_or_init(|| key))
    }
}

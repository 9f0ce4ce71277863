//! RSA public key material decoded from a JWK
//!
//! A JWK carries the RSA modulus (`n`) and public exponent (`e`) as unpadded
//! base64url encodings of big-endian unsigned integers. This module turns those
//! strings into a [`RsaPublicKey`].
//!
//! Decoding is format-only: no primality, size or parity checks are made on the
//! resulting integers. Callers that need a key-strength policy apply it to the
//! returned key (see [`RsaPublicKey::bits`]).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use num_bigint::BigUint;

use crate::error::base64_component_error;
use crate::error::missing_component_error;
use crate::error::non_positive_component_error;
use crate::error::KeyComponent;
use crate::error::Result;

/// An RSA public key: modulus and public exponent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaPublicKey {
    modulus: BigUint,
    exponent: BigUint,
}

impl RsaPublicKey {
    /// Create a key from its modulus and exponent
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        Self { modulus, exponent }
    }

    /// Decode a key from the base64url `n` and `e` members of a JWK
    ///
    /// `kid` is only used to label errors.
    ///
    /// # Errors
    /// Returns `Error::MalformedKeyMaterial` if either member is missing, is not
    /// unpadded base64url, or does not encode a positive integer.
    pub fn from_components(kid: &str, n: Option<&str>, e: Option<&str>) -> Result<Self> {
        let modulus = decode_component(kid, KeyComponent::Modulus, n)?;
        let exponent = decode_component(kid, KeyComponent::Exponent, e)?;

        Ok(Self::new(modulus, exponent))
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// Big-endian bytes of the modulus, without leading zeros
    pub fn modulus_bytes(&self) -> Vec<u8> {
        self.modulus.to_bytes_be()
    }

    /// Big-endian bytes of the exponent, without leading zeros
    pub fn exponent_bytes(&self) -> Vec<u8> {
        self.exponent.to_bytes_be()
    }

    /// Size of the modulus in bits
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Build a `jsonwebtoken` decoding key for verifying RS256 signatures
    ///
    /// # Errors
    /// Returns `Error::DecodingKey` if `jsonwebtoken` rejects the components.
    #[cfg(feature = "decoding-key")]
    pub fn to_decoding_key(&self) -> Result<jsonwebtoken::DecodingKey> {
        let n = URL_SAFE_NO_PAD.encode(self.modulus_bytes());
        let e = URL_SAFE_NO_PAD.encode(self.exponent_bytes());

        Ok(jsonwebtoken::DecodingKey::from_rsa_components(&n, &e)?)
    }
}

/// Decode one base64url member into an unsigned integer
///
/// The whole byte sequence is the magnitude: leading zero bytes are accepted and
/// do not change the value.
fn decode_component(
    kid: &str,
    component: KeyComponent,
    encoded: Option<&str>,
) -> Result<BigUint> {
    let encoded = encoded.ok_or_else(|| missing_component_error(kid, component))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| base64_component_error(kid, component, e))?;

    let value = BigUint::from_bytes_be(&bytes);
    if value.bits() == 0 {
        return Err(non_positive_component_error(kid, component));
    }

    Ok(value)
}

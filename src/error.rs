use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed JWKS document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("The given key ID was not found in the JWKS: {0}")]
    KeyIdNotFound(String),
    #[error("Key {kid:?} is not of the expected type, only RS256 is supported, got: {alg:?}")]
    UnsupportedKeyType { kid: String, alg: String },
    #[error("Key {kid:?} has malformed {component}: {reason}")]
    MalformedKeyMaterial {
        kid: String,
        component: KeyComponent,
        reason: String,
    },
    #[cfg(feature = "decoding-key")]
    #[error("JWT error: {0}")]
    DecodingKey(#[from] jsonwebtoken::errors::Error),
}

/// The RSA field a [`Error::MalformedKeyMaterial`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyComponent {
    /// `n`
    Modulus,
    /// `e`
    Exponent,
}

impl fmt::Display for KeyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyComponent::Modulus => f.write_str("modulus (n)"),
            KeyComponent::Exponent => f.write_str("exponent (e)"),
        }
    }
}

pub(crate) fn missing_component_error(kid: &str, component: KeyComponent) -> Error {
    Error::MalformedKeyMaterial {
        kid: kid.to_string(),
        component,
        reason: "field is missing".to_string(),
    }
}

pub(crate) fn base64_component_error(
    kid: &str,
    component: KeyComponent,
    error: base64::DecodeError,
) -> Error {
    Error::MalformedKeyMaterial {
        kid: kid.to_string(),
        component,
        reason: format!("invalid base64url: {error}"),
    }
}

pub(crate) fn non_positive_component_error(kid: &str, component: KeyComponent) -> Error {
    Error::MalformedKeyMaterial {
        kid: kid.to_string(),
        component,
        reason: "value is not a positive integer".to_string(),
    }
}

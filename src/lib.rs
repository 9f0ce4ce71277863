//! # jwks-keystore
//!
//! A small Rust library that parses a JWKS (JSON Web Key Set) into a keystore
//! indexed by key ID, and rebuilds RSA public keys from the entries.
//!
//! ## Features
//!
//! - Parse JWKS documents from bytes, strings, readers or `serde_json::Value`s
//! - Look up keys by `kid`, last record wins on duplicates
//! - Decode the base64url `n`/`e` members of RS256 keys into an [`RsaPublicKey`]
//! - Decoded keys are cached per entry, decoding failures are not
//! - Optional conversion into a `jsonwebtoken::DecodingKey` (`decoding-key` feature, on by default)
//!
//! Fetching the JWKS, refreshing it and verifying signatures are left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use jwks_keystore::{BigUint, Keystore};
//!
//! # fn main() -> Result<(), jwks_keystore::Error> {
//! let jwks = br#"{"keys":[{"kid":"k1","alg":"RS256","n":"AQAB","e":"AQAB"}]}"#;
//! let keystore = Keystore::from_slice(jwks)?;
//!
//! let key = keystore.rsa("k1")?;
//! assert_eq!(key.exponent(), &BigUint::from(65537u32));
//! # Ok(())
//! # }
//! ```

mod error;
mod key;
mod keystore;
mod rsa;

// Re-exports for public API
pub use error::Error;
pub use error::KeyComponent;
pub use error::Result;
pub use key::JsonKey;
pub use keystore::Keystore;
pub use keystore::RS256;
pub use num_bigint::BigUint;
pub use rsa::RsaPublicKey;

use std::collections::hash_map;
use std::collections::HashMap;
use std::io;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::error::Result;
use crate::key::JsonKey;
use crate::rsa::RsaPublicKey;

/// Algorithm tag of the only key type the keystore can rebuild
pub const RS256: &str = "RS256";

/// A JWKS exactly as it appears on the wire
#[derive(Debug, Deserialize)]
struct RawKeystore {
    keys: Vec<JsonKey>,
}

/// A parsed JWKS, indexed by key ID
///
/// Built once from a JSON document and read-only afterwards. If the document
/// lists the same `kid` more than once, the last record wins.
#[derive(Debug, Clone, Default)]
pub struct Keystore {
    keys: HashMap<String, JsonKey>,
}

impl Keystore {
    /// Parse a keystore from raw JWKS bytes
    ///
    /// # Errors
    /// Returns `Error::Parse` if the bytes are not a JSON object with a `keys` array
    /// of key records.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawKeystore = serde_json::from_slice(bytes)?;
        Ok(Self::index(raw))
    }

    /// Parse a keystore from a reader, e.g. an open file
    ///
    /// # Errors
    /// Same as [`Keystore::from_slice`]; I/O failures are also reported as `Error::Parse`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let raw: RawKeystore = serde_json::from_reader(reader)?;
        Ok(Self::index(raw))
    }

    /// Build a keystore from an already parsed JSON value
    ///
    /// # Errors
    /// Same as [`Keystore::from_slice`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawKeystore = serde_json::from_value(value)?;
        Ok(Self::index(raw))
    }

    fn index(raw: RawKeystore) -> Self {
        let records = raw.keys.len();
        let mut keys = HashMap::with_capacity(records);

        // Each record is moved into its own slot.
        for key in raw.keys {
            if let Some(replaced) = keys.insert(key.kid().to_string(), key) {
                tracing::debug!(
                    kid = replaced.kid(),
                    "duplicate key ID in JWKS, keeping the later record"
                );
            }
        }

        tracing::debug!(records, indexed = keys.len(), "parsed JWKS");
        Self { keys }
    }

    /// Get the RSA public key for the given key ID
    ///
    /// The key is decoded on first use and cached on its entry.
    ///
    /// # Errors
    /// - `Error::KeyIdNotFound` if no entry has this `kid`
    /// - `Error::UnsupportedKeyType` if the entry's `alg` is not `RS256`
    /// - `Error::MalformedKeyMaterial` if the entry's `n` or `e` cannot be decoded
    pub fn rsa(&self, kid: &str) -> Result<&RsaPublicKey> {
        let key = self
            .keys
            .get(kid)
            .ok_or_else(|| Error::KeyIdNotFound(kid.to_string()))?;

        if key.alg() != RS256 {
            return Err(Error::UnsupportedKeyType {
                kid: kid.to_string(),
                alg: key.alg().to_string(),
            });
        }

        key.rsa()
    }

    /// Get the raw entry for the given key ID
    pub fn get(&self, kid: &str) -> Option<&JsonKey> {
        self.keys.get(kid)
    }

    pub fn contains(&self, kid: &str) -> bool {
        self.keys.contains_key(kid)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key IDs in the keystore, in no particular order
    pub fn kids(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// Entries in the keystore, in no particular order
    pub fn iter(&self) -> hash_map::Values<'_, String, JsonKey> {
        self.keys.values()
    }
}

impl FromStr for Keystore {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Keystore {
    type Item = &'a JsonKey;
    type IntoIter = hash_map::Values<'a, String, JsonKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use jwks_keystore::Error;
use jwks_keystore::Keystore;
use tracing_subscriber::EnvFilter;

const JWKS: &str = r#"{
  "keys": [
    { "kty": "RSA", "use": "sig", "kid": "primary", "alg": "RS256", "n": "AQAB", "e": "AQAB" },
    { "kty": "EC", "use": "sig", "kid": "ec-key", "alg": "ES256", "crv": "P-256", "x": "AQ", "y": "AQ" },
    { "kty": "RSA", "use": "sig", "kid": "broken", "alg": "RS256", "n": "%%%", "e": "AQAB" }
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example 1: Load a JWKS, from a file if one is given
    println!("=== Example 1: Load a JWKS ===");
    let keystore = match std::env::args().nth(1) {
        Some(path) => Keystore::from_reader(std::io::BufReader::new(std::fs::File::open(path)?))?,
        None => JWKS.parse::<Keystore>()?,
    };
    println!("Loaded {} keys", keystore.len());

    println!();

    // Example 2: Resolve every key and report what happened
    println!("=== Example 2: Resolve keys ===");
    let mut kids: Vec<_> = keystore.kids().collect();
    kids.sort_unstable();

    for kid in kids {
        match keystore.rsa(kid) {
            Ok(key) => {
                println!("✓ {kid}: {}-bit modulus", key.bits());
                println!("  Exponent: {}", key.exponent());
            }
            Err(Error::UnsupportedKeyType { alg, .. }) => {
                println!("- {kid}: skipped, algorithm {alg:?} is not RS256");
            }
            Err(e) => {
                eprintln!("✗ {kid}: {e}");
            }
        }
    }

    println!();

    // Example 3: Unknown key IDs are a typed error
    println!("=== Example 3: Unknown key ID ===");
    if let Err(e) = keystore.rsa("rotated-away") {
        println!("✗ {e}");
    }

    Ok(())
}

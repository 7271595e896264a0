use sha2::{Digest, Sha256};

// Every stored digest was produced with this application-wide salt; changing
// it invalidates all existing credentials.
const PASSWORD_SALT: &str = "v0yago.2019";

/// Hex-encoded SHA-256 of the salted plaintext.
pub fn hash_password(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(PASSWORD_SALT.as_bytes());
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(plain: &str, digest: &str) -> bool {
    hash_password(plain) == digest
}

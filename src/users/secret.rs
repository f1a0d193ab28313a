use std::sync::Arc;

use lazy_static::lazy_static;
use rand::{rngs::OsRng, Rng};
use regex::Regex;

pub const SECRET_LEN: usize = 10;

const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Source of new secret keys. Swapped for a deterministic one in tests.
pub type SecretGenerator = Arc<dyn Fn() -> String + Send + Sync>;

pub fn os_random_generator() -> SecretGenerator {
    Arc::new(generate_secret_key)
}

/// 10 characters from the URL-safe base64 alphabet, drawn from the OS CSPRNG.
pub fn generate_secret_key() -> String {
    let mut rng = OsRng;
    (0..SECRET_LEN)
        .map(|_| URL_SAFE_ALPHABET[rng.gen_range(0..URL_SAFE_ALPHABET.len())] as char)
        .collect()
}

pub fn is_well_formed_secret(secret: &str) -> bool {
    lazy_static! {
        static ref SECRET_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]{10}$").unwrap();
    }
    SECRET_RE.is_match(secret)
}

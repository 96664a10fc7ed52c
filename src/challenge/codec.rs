//! Challenge payload encryption
//!
//! The attempt list is serialized as JSON and sealed with AES-256-GCM. The key
//! is the SHA-256 digest of the normalized solution word, so only someone who
//! knows the word can open the payload. A wrong word fails authentication
//! instead of producing garbage.
//!
//! Wire format: base64url without padding of `nonce (12 bytes) || ciphertext || tag`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Failure to build a challenge payload
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to serialize attempts")]
    Serialize(#[from] serde_json::Error),
    #[error("encryption failed")]
    Encrypt,
}

/// Failure to open a challenge payload
///
/// Decoding is all-or-nothing: no variant carries partial data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not base64url, or too short to hold a nonce and tag
    #[error("challenge payload is malformed")]
    Malformed,
    /// Authentication failed: wrong solution or tampered payload
    #[error("challenge could not be opened with that word")]
    Rejected,
    /// Authenticated, but the contents are not a list of words
    #[error("challenge payload is corrupted")]
    Corrupted,
}

/// Key for `word`: SHA-256 of its lowercase letters
fn cipher_for(word: &str) -> Aes256Gcm {
    let normalized: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let digest = Sha256::digest(normalized.as_bytes());
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&digest))
}

/// Encrypt `attempts` with `key`, using a fresh random nonce
///
/// # Errors
///
/// Returns `CodecError` if serialization or encryption fails.
///
/// # Examples
/// ```
/// use yawdle::challenge::{decode, encode};
///
/// let attempts = vec!["slate".to_string(), "crane".to_string()];
/// let payload = encode("crane", &attempts).unwrap();
/// assert_eq!(decode("crane", &payload).unwrap(), attempts);
/// assert!(decode("slate", &payload).is_err());
/// ```
pub fn encode(key: &str, attempts: &[String]) -> Result<String, CodecError> {
    encode_with_rng(key, attempts, &mut rand::rng())
}

/// Encrypt `attempts` with `key`, drawing the nonce from `rng`
///
/// # Errors
///
/// Returns `CodecError` if serialization or encryption fails.
pub fn encode_with_rng<R: RngCore + ?Sized>(
    key: &str,
    attempts: &[String],
    rng: &mut R,
) -> Result<String, CodecError> {
    let plaintext = serde_json::to_vec(attempts)?;

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let ciphertext = cipher_for(key)
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_slice())
        .map_err(|_| CodecError::Encrypt)?;

    let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(URL_SAFE_NO_PAD.encode(payload))
}

/// Decrypt a payload produced by [`encode`]
///
/// # Errors
///
/// - `DecodeError::Malformed` if the payload is not well-formed base64url or
///   is too short
/// - `DecodeError::Rejected` if `key` is not the word it was sealed with, or
///   the payload was altered
/// - `DecodeError::Corrupted` if the authenticated plaintext is not a list of
///   words
pub fn decode(key: &str, payload: &str) -> Result<Vec<String>, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim())
        .map_err(|_| DecodeError::Malformed)?;
    if bytes.len() < NONCE_LEN + TAG_LEN {
        return Err(DecodeError::Malformed);
    }

    let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
    let plaintext = cipher_for(key)
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| DecodeError::Rejected)?;

    let attempts: Vec<String> =
        serde_json::from_slice(&plaintext).map_err(|_| DecodeError::Corrupted)?;
    if attempts
        .iter()
        .any(|word| word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()))
    {
        return Err(DecodeError::Corrupted);
    }
    Ok(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn attempts(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    /// Seal arbitrary plaintext the way `encode` does
    fn seal(key: &str, plaintext: &[u8]) -> String {
        let nonce = [7u8; NONCE_LEN];
        let ciphertext = cipher_for(key)
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .unwrap();
        URL_SAFE_NO_PAD.encode([nonce.as_slice(), ciphertext.as_slice()].concat())
    }

    #[test]
    fn round_trip() {
        let words = attempts(&["slate", "irate", "crane"]);
        let payload = encode("crane", &words).unwrap();
        assert_eq!(decode("crane", &payload).unwrap(), words);
    }

    #[test]
    fn empty_history_round_trips() {
        let payload = encode("crane", &[]).unwrap();
        assert_eq!(decode("crane", &payload).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn wrong_key_is_rejected() {
        let payload = encode("crane", &attempts(&["slate"])).unwrap();
        for guess in ["slate", "cranes", "", "crone"] {
            assert_eq!(decode(guess, &payload), Err(DecodeError::Rejected));
        }
    }

    #[test]
    fn key_is_normalized() {
        let payload = encode("crane", &attempts(&["slate"])).unwrap();
        assert!(decode("CRANE", &payload).is_ok());
        assert!(decode(" crane ", &payload).is_ok());
    }

    #[test]
    fn payload_is_url_safe() {
        let payload = encode("crane", &attempts(&["slate", "irate"])).unwrap();
        assert!(
            payload
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!payload.contains("slate"));
    }

    #[test]
    fn nonces_differ_between_encodings() {
        let words = attempts(&["slate"]);
        assert_ne!(
            encode("crane", &words).unwrap(),
            encode("crane", &words).unwrap()
        );
    }

    #[test]
    fn seeded_rng_gives_reproducible_payload() {
        let words = attempts(&["slate"]);
        let a = encode_with_rng("crane", &words, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = encode_with_rng("crane", &words, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(decode("crane", "not base64!"), Err(DecodeError::Malformed));
        assert_eq!(decode("crane", ""), Err(DecodeError::Malformed));
        assert_eq!(decode("crane", "AAAA"), Err(DecodeError::Malformed));
    }

    #[test]
    fn tampering_is_rejected() {
        let payload = encode("crane", &attempts(&["slate"])).unwrap();
        let mut bytes = URL_SAFE_NO_PAD.decode(&payload).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = URL_SAFE_NO_PAD.encode(bytes);
        assert_eq!(decode("crane", &tampered), Err(DecodeError::Rejected));
    }

    #[test]
    fn authenticated_non_list_is_corrupted() {
        let payload = seal("crane", br#"{"not":"a list"}"#);
        assert_eq!(decode("crane", &payload), Err(DecodeError::Corrupted));

        let payload = seal("crane", br#"["Slate!"]"#);
        assert_eq!(decode("crane", &payload), Err(DecodeError::Corrupted));
    }
}

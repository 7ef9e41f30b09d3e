//! # ID Generation
//!
//! Session-unique item identifiers using Crockford's Base32 encoding.
//! An ID is 7 characters: 4 chars of seconds-since-midnight UTC followed
//! by 3 random chars (e.g., `0A2BK4M`).
//!
//! Uniqueness within a session is enforced by the item store, which
//! regenerates on the (rare) collision.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{Timelike, Utc};
use rand::Rng;

/// Crockford's Base32 alphabet (excludes I, L, O, U for readability)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Width of the time component in characters.
const TIME_WIDTH: usize = 4;

/// Width of the random component in characters.
const RANDOM_WIDTH: usize = 3;

/// Total ID length in characters.
pub const ID_LENGTH: usize = TIME_WIDTH + RANDOM_WIDTH;

/// Generates a new identifier.
///
/// IDs sort roughly by creation time within a day; the random tail keeps
/// same-second creations distinct.
pub fn generate() -> String {
    let now = Utc::now();
    let seconds_since_midnight = u64::from(now.hour()) * 3600
        + u64::from(now.minute()) * 60
        + u64::from(now.second());

    let mut id = encode(seconds_since_midnight, TIME_WIDTH);

    let mut rng = rand::rng();
    for _ in 0..RANDOM_WIDTH {
        let idx = rng.random_range(0..CROCKFORD_ALPHABET.len());
        id.push(CROCKFORD_ALPHABET[idx] as char);
    }

    id
}

/// Encodes a u64 value into a fixed-width Crockford Base32 string,
/// left-padded with '0'.
fn encode(mut value: u64, width: usize) -> String {
    let mut result = Vec::with_capacity(width);

    for _ in 0..width {
        let idx = (value % 32) as usize;
        result.push(CROCKFORD_ALPHABET[idx]);
        value /= 32;
    }

    result.reverse();
    // SAFETY: CROCKFORD_ALPHABET contains only ASCII characters
    String::from_utf8(result).expect("Base32 alphabet is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_length() {
        assert_eq!(generate().len(), ID_LENGTH);
    }

    #[test]
    fn test_id_alphabet() {
        let id = generate();
        assert!(id.bytes().all(|b| CROCKFORD_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0, 4), "0000");
    }

    #[test]
    fn test_encode_max_seconds() {
        // 86399 seconds (23:59:59) should fit in 4 chars
        let result = encode(86_399, 4);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_encode_width() {
        assert_eq!(encode(1, 1), "1");
        assert_eq!(encode(1, 4), "0001");
        assert_eq!(encode(32, 4), "0010");
    }

    #[test]
    fn test_alphabet_excludes_confusing_chars() {
        let alphabet = String::from_utf8_lossy(CROCKFORD_ALPHABET);
        assert!(!alphabet.contains('I'));
        assert!(!alphabet.contains('L'));
        assert!(!alphabet.contains('O'));
        assert!(!alphabet.contains('U'));
    }

    #[test]
    fn test_ids_differ() {
        // Random tail makes back-to-back IDs distinct with overwhelming
        // probability; try a few to keep flakiness negligible.
        let ids: Vec<String> = (0..8).map(|_| generate()).collect();
        let distinct: std::collections::HashSet<&String> = ids.iter().collect();
        assert!(distinct.len() > 1);
    }
}

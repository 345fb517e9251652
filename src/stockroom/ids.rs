//! Identifier generation for new products.
//!
//! Ids are the base-36 epoch milliseconds followed by five random base-36
//! characters, e.g. `lq2x9k0a7f3q`. Nothing downstream relies on global
//! uniqueness; collisions within one session are merely very unlikely.

use chrono::{DateTime, Utc};
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 5;

pub fn new_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let mut id = to_base36(millis);

    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_SUFFIX_LEN {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn id_starts_with_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let id = new_id(now);
        assert!(id.starts_with("loyw3v28"));
        assert_eq!(id.len(), "loyw3v28".len() + RANDOM_SUFFIX_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn ids_do_not_collide_in_practice() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..500).map(|_| new_id(now)).collect();
        assert!(ids.len() > 495);
    }
}

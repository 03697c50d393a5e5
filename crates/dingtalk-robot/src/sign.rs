//! Request signing for robots with the "additional signature" security
//! setting enabled.
//!
//! The signature is `base64(HMAC-SHA256(secret, "{timestamp}\n{secret}"))` where
//! the timestamp is Unix epoch milliseconds. The endpoint rejects stale
//! timestamps, so a suffix must be generated per request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[must_use]
pub fn compute_signature(timestamp: &str, secret: &str) -> String {
    let string_to_sign = format!("{timestamp}\n{secret}");
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(string_to_sign.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Query suffix `&timestamp=<T>&sign=<S>` for a fixed timestamp.
#[must_use]
pub fn signed_suffix_at(timestamp_ms: i64, secret: &str) -> String {
    let timestamp = timestamp_ms.to_string();
    let sign = compute_signature(&timestamp, secret);
    format!("&timestamp={}&sign={}", timestamp, urlencoding::encode(&sign))
}

/// Query suffix signed with the current wall-clock time.
#[must_use]
pub fn signed_suffix(secret: &str) -> String {
    signed_suffix_at(chrono::Utc::now().timestamp_millis(), secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "SECtest-secret";
    const TIMESTAMP: i64 = 1_700_000_000_000;

    #[test]
    fn test_signature_known_vector() {
        let sig = compute_signature("1700000000000", SECRET);
        assert_eq!(sig, "LC7hxZ4wslL+P7j7gu1hoQ+wzByekL+yWgiUMekZs0g=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let sig = compute_signature("1234567890", SECRET);
        assert_eq!(sig, compute_signature("1234567890", SECRET));
        assert_ne!(sig, compute_signature("1234567891", SECRET));
        assert_ne!(sig, compute_signature("1234567890", "other"));
    }

    #[test]
    fn test_suffix_percent_encodes_signature() {
        let suffix = signed_suffix_at(TIMESTAMP, SECRET);
        assert_eq!(
            suffix,
            "&timestamp=1700000000000&sign=LC7hxZ4wslL%2BP7j7gu1hoQ%2BwzByekL%2ByWgiUMekZs0g%3D"
        );
    }

    #[test]
    fn test_suffix_shape_with_current_time() {
        let suffix = signed_suffix(SECRET);
        let rest = suffix.strip_prefix("&timestamp=").unwrap();
        let (timestamp, sign) = rest.split_once("&sign=").unwrap();

        assert!(!timestamp.is_empty());
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert!(!sign.is_empty());
        assert!(!sign.contains(['+', '/', '=']));
    }

    #[test]
    fn test_timestamps_one_millisecond_apart_differ() {
        let first = signed_suffix_at(TIMESTAMP, SECRET);
        let second = signed_suffix_at(TIMESTAMP + 1, SECRET);
        assert_ne!(first, second);

        let sign = |s: &str| s.split_once("&sign=").unwrap().1.to_string();
        assert_ne!(sign(&first), sign(&second));
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let sig = compute_signature("1", "");
        assert!(!sig.is_empty());
    }
}

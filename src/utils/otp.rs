use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generates a 6-digit numeric one-time code, zero-padded.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000))
}

/// A code must be exactly six ASCII digits before it is ever compared
/// against the stored value.
pub fn is_valid_format(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

pub fn expiry_from_now(minutes: i64) -> DateTime<Utc> {
    Utc::now() + Duration::minutes(minutes)
}

pub fn is_expired(expires_at: DateTime<Utc>) -> bool {
    Utc::now() > expires_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..50 {
            let code = generate_code();
            assert!(is_valid_format(&code), "bad code: {}", code);
        }
    }

    #[test]
    fn format_check_rejects_short_and_non_numeric_input() {
        assert!(!is_valid_format("12345"));
        assert!(!is_valid_format("1234567"));
        assert!(!is_valid_format("12a456"));
        assert!(!is_valid_format(""));
        assert!(is_valid_format("012345"));
    }

    #[test]
    fn expiry_window_is_in_the_future() {
        let expires_at = expiry_from_now(15);
        assert!(!is_expired(expires_at));
        assert!(is_expired(Utc::now() - Duration::minutes(1)));
    }
}

use crate::utils::response::ApiResponse;
use axum::Json;
use bcrypt::hash;
use serde_json::Value;

pub fn hash_password(password: &str) -> Result<String, Json<ApiResponse<Value>>> {
    let hashed = match hash(password, 10) {
        Ok(hashed) => hashed,
        Err(e) => {
            return Err(Json(ApiResponse::error(&format!(
                "Failed to hash password: {}",
                e
            ))));
        }
    };
    Ok(hashed)
}

/// Four independent strength predicates, checked server-side. Returns the list
/// of unmet requirements, empty when the password is acceptable.
pub fn strength_errors(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.push("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        errors.push("Password must contain at least one special character");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes_all_predicates() {
        assert!(strength_errors("s3cure!pass").is_empty());
    }

    #[test]
    fn each_predicate_is_independent() {
        // too short, but satisfies the other three
        assert_eq!(strength_errors("a1!x").len(), 1);
        // long enough, letters only
        assert_eq!(strength_errors("abcdefgh").len(), 2);
        // digits only
        assert_eq!(strength_errors("12345678").len(), 2);
        // no special character
        assert_eq!(strength_errors("abcd1234").len(), 1);
    }

    #[test]
    fn hashing_produces_verifiable_digest() {
        let hashed = hash_password("s3cure!pass").unwrap();
        assert!(bcrypt::verify("s3cure!pass", &hashed).unwrap());
        assert!(!bcrypt::verify("wrong", &hashed).unwrap());
    }
}

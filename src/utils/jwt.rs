use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error as JwtError,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub sub: i64, // user id
    pub role: String,
    pub exp: usize,
}

pub fn generate_token(user_id: i64, role: &str) -> Result<String, JwtError> {
    // default expiry 24 hours
    let exp = Utc::now()
        .checked_add_signed(Duration::seconds(
            std::env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse::<i64>()
                .unwrap_or(86400),
        ))
        .unwrap()
        .timestamp() as usize;

    encode(
        &Header::default(),
        &Claims {
            sub: user_id,
            role: role.to_string(),
            exp,
        },
        &EncodingKey::from_secret(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "secret".to_string())
                .as_ref(),
        ),
    )
}

pub fn verify_token(token: &str) -> Result<Claims, JwtError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "secret".to_string())
                .as_ref(),
        ),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_keeps_subject_and_role() {
        let token = generate_token(42, "admin").unwrap();
        let claims = verify_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token("not.a.token").is_err());
    }
}

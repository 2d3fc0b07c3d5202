use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

/// HS256 token claims. `sub` is the owning user id every video query is
/// scoped by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub exp: i64,
}

pub fn issue_token(
    user: &UserRow,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role.clone(),
        exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Extractor for authenticated routes: parses the `Authorization: Bearer`
/// header and validates the token. Missing or invalid credentials become a
/// 401 before the handler body runs.
pub struct AuthUser(pub Claims);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;
        let claims = decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized)?;
        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: String::new(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_then_decode_round_trip() {
        let user = test_user();
        let token = issue_token(&user, "test-secret", 24).unwrap();
        let claims = decode_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(&test_user(), "test-secret", 24).unwrap();
        assert!(decode_token(&token, "another-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue_token(&test_user(), "test-secret", -1).unwrap();
        assert!(decode_token(&token, "test-secret").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let mut token = issue_token(&test_user(), "test-secret", 24).unwrap();
        token.push('x');
        assert!(decode_token(&token, "test-secret").is_err());
    }
}

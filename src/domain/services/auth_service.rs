use crate::config::Config;
use crate::domain::models::admin::{Admin, SessionClaims};
use crate::error::AppError;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// Verifies admin credentials and issues the short-lived session token
/// carried by the `session_token` cookie.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_min: i64,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            ttl_min: config.session_ttl_min,
        }
    }

    pub fn verify_password(&self, admin: &Admin, password: &str) -> Result<(), AppError> {
        let parsed_hash = PasswordHash::new(&admin.password_hash)
            .map_err(|_| AppError::Internal)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)
    }

    pub fn issue_session(&self, admin: &Admin) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: admin.id.clone(),
            email: admin.email.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::minutes(self.ttl_min)).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Session token encoding failed: {}", e);
            AppError::Internal
        })
    }

    pub fn verify_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    pub fn session_ttl_min(&self) -> i64 {
        self.ttl_min
    }
}

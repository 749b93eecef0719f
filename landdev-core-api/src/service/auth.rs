//! Password hashing and bearer token issuance/validation.
//!
//! Resolving a token's subject against the user store happens in the server,
//! which owns the repositories.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::auth::Claims;
use crate::error::{ApiError, ApiResult};

pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 60 * 24;
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hashes a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> ApiResult<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| ApiError::InternalError(format!("Failed to hash password: {e}")))
}

/// Checks a password against a stored bcrypt hash. A malformed hash never
/// verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

/// Issues and validates HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_minutes: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs: ttl_minutes.saturating_mul(60),
        }
    }

    /// Issues a token for `username`, valid from now.
    pub fn issue(&self, username: &str) -> ApiResult<String> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        self.issue_at(username, now)
    }

    /// Issues a token for `username` as if issued at `issued_at` (unix seconds).
    pub fn issue_at(&self, username: &str, issued_at: u64) -> ApiResult<String> {
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::InternalError(format!("Failed to issue token: {e}")))
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn validate(&self, token: &str) -> ApiResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;
        if data.claims.sub.is_empty() {
            return Err(ApiError::Unauthorized("Invalid token".to_string()));
        }
        Ok(data.claims)
    }

    /// Extracts the token from an `Authorization` header value and validates it.
    pub fn validate_bearer(&self, header: Option<&str>) -> ApiResult<Claims> {
        let header = header
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;
        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Malformed Authorization header".to_string()))?;
        self.validate(token)
    }
}

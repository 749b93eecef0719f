//! Registration, login and bearer-token resolution against the user store

use std::sync::Arc;

use landdev_core_api::{
    hash_password, verify_password, ApiError, ApiResult, ForgotPasswordRequest, LoginRequest,
    MessageResponse, RegisterRequest, TokenResponse, TokenService,
};
use landdev_core_db::models::auth::UserModel;
use landdev_core_db::repository::error::is_duplicate_key;
use landdev_core_db::repository::{Create, FindByUsername, UserRepository};
use tracing::{info, warn};
use validator::Validate;

use super::store_failure;
use crate::config::SeedUser;

const BAD_CREDENTIALS: &str = "Incorrect username or password";
const RESET_ACKNOWLEDGEMENT: &str = "If user exists, reset instructions sent";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResult<MessageResponse> {
        request.validate()?;
        self.create_user(&request.username, request.password).await?;
        info!(username = %request.username, "user registered");
        Ok(MessageResponse::new("User registered successfully"))
    }

    /// Issues a bearer token. Unknown users and wrong passwords fail alike.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<TokenResponse> {
        request.validate()?;

        let Some(user) = self.find_user(&request.username).await? else {
            warn!(username = %request.username, "login for unknown user");
            return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
        };

        let password_hash = user.password_hash.as_str().to_string();
        let verified = tokio::task::spawn_blocking(move || {
            verify_password(&request.password, &password_hash)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("Password verification task failed: {e}")))?;

        if !verified {
            warn!(username = %user.username, "login with wrong password");
            return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(user.username.as_str())?;
        info!(username = %user.username, "user logged in");
        Ok(TokenResponse::bearer(token))
    }

    /// Acknowledges a reset request without revealing whether the user exists.
    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> ApiResult<MessageResponse> {
        request.validate()?;
        info!(username = %request.username, "password reset requested");
        Ok(MessageResponse::new(RESET_ACKNOWLEDGEMENT))
    }

    /// Resolves an `Authorization` header value to the user it names.
    pub async fn authenticate(&self, authorization: Option<&str>) -> ApiResult<UserModel> {
        let claims = self.tokens.validate_bearer(authorization).inspect_err(|e| {
            warn!(error = %e, "rejected bearer token");
        })?;

        match self.find_user(&claims.sub).await? {
            Some(user) => Ok(user),
            None => {
                warn!(username = %claims.sub, "token subject no longer exists");
                Err(ApiError::Unauthorized("Could not validate credentials".to_string()))
            }
        }
    }

    /// Creates the configured user unless it already exists. Returns whether
    /// a user was created.
    pub async fn seed_user(&self, seed: &SeedUser) -> ApiResult<bool> {
        if self.find_user(&seed.username).await?.is_some() {
            info!(username = %seed.username, "seed user already present");
            return Ok(false);
        }
        match self.create_user(&seed.username, seed.password.clone()).await {
            Ok(()) => {
                info!(username = %seed.username, "seed user created");
                Ok(true)
            }
            // lost a race with another instance seeding the same user
            Err(ApiError::Conflict(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn find_user(&self, username: &str) -> ApiResult<Option<UserModel>> {
        self.users
            .find_by_username(username)
            .await
            .map_err(|e| store_failure("find_user", e))
    }

    async fn create_user(&self, username: &str, password: String) -> ApiResult<()> {
        if self.find_user(username).await?.is_some() {
            return Err(username_taken());
        }

        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| ApiError::InternalError(format!("Password hashing task failed: {e}")))??;

        let user = UserModel::new(username, &password_hash)?;
        match self.users.create(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(e.as_ref()) => Err(username_taken()),
            Err(e) => Err(store_failure("create_user", e)),
        }
    }
}

fn username_taken() -> ApiError {
    ApiError::Conflict("Username already registered".to_string())
}

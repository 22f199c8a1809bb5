//! Authentication service: signup, login and token verification, plus
//! the signed impersonation token used by the admin surface.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, MIN_PASSWORD_LENGTH, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{AdminUser, Password, UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{MenuRepository, UserRepository};

use super::provisioning::{provision_account, NewAccount};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Impersonation token claims. Issued to a super-admin, names the
/// portfolio being viewed; carried in an httpOnly cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImpersonationClaims {
    pub sub: Uuid,
    pub portfolio_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 604800)]
    pub expires_in: i64,
}

/// Authentication operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account: user plus an empty DRAFT portfolio with
    /// a hidden instance of every platform menu.
    async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> AppResult<UserResponse>;

    /// Login and return JWT token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Sign an impersonation token naming the target portfolio.
    fn issue_impersonation_token(&self, admin_id: Uuid, portfolio_id: Uuid) -> AppResult<String>;

    /// Verify an impersonation token and return its claims.
    fn verify_impersonation_token(&self, token: &str) -> AppResult<ImpersonationClaims>;
}

fn generate_token(user: &AdminUser, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    menus: Arc<dyn MenuRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        menus: Arc<dyn MenuRepository>,
        config: Config,
    ) -> Self {
        Self {
            users,
            menus,
            config,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> AppResult<UserResponse> {
        // Email format is validated by the handler's ValidatedJson extractor
        if (password.len() as u64) < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let (user, portfolio_id) = provision_account(
            &self.users,
            &self.menus,
            NewAccount {
                email,
                password,
                name,
                // Signup never grants platform roles.
                role: UserRole::User,
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, "Account registered");
        Ok(UserResponse::from_user(user, portfolio_id))
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        generate_token(user_result.as_ref().unwrap(), &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    fn issue_impersonation_token(&self, admin_id: Uuid, portfolio_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = ImpersonationClaims {
            sub: admin_id,
            portfolio_id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?)
    }

    fn verify_impersonation_token(&self, token: &str) -> AppResult<ImpersonationClaims> {
        let token_data = decode::<ImpersonationClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

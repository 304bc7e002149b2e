//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use secrecy::SecretString;

use crate::adapters::http::error::ApiError;
use crate::application::{
    LoginCommand, LoginHandler, LoginMode, SignupCommand, SignupHandler, StoreDeadline,
};
use crate::ports::{PasswordHasher, UserRepository};

use super::dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

/// Application state for account endpoints.
///
/// Cloned for each request; handlers are built from the shared ports.
#[derive(Clone)]
pub struct AccountAppState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub deadline: StoreDeadline,
}

impl AccountAppState {
    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(self.users.clone(), self.hasher.clone(), self.deadline)
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.users.clone(), self.hasher.clone(), self.deadline)
    }
}

/// POST /api/signup
pub async fn signup(
    State(state): State<AccountAppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_body)?;

    let cmd = SignupCommand {
        username: request.username.unwrap_or_default(),
        password: request
            .password
            .unwrap_or_else(|| SecretString::new(String::new())),
    };
    let result = state.signup_handler().handle(cmd).await?;

    tracing::info!(user_id = %result.user.id, username = %result.user.username, "User created");

    Ok((StatusCode::CREATED, Json(SignupResponse::created(result.user))))
}

/// POST /api/login
pub async fn login(
    State(state): State<AccountAppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_body)?;

    let cmd = LoginCommand {
        username: request.username.unwrap_or_default(),
        password: request.password,
    };
    let result = state.login_handler().handle(cmd).await?;

    match result.mode {
        LoginMode::Password => {
            tracing::info!(username = %result.username, "Login successful");
        }
        LoginMode::Legacy => {
            tracing::warn!(
                username = %result.username,
                "Legacy login without password; token issued without verification"
            );
        }
    }

    Ok(Json(LoginResponse::authenticated(result.token.into_inner())))
}

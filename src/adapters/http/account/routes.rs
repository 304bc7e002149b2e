//! Axum router configuration for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, signup, AccountAppState};

/// Create the account API router.
///
/// # Routes
///
/// - `POST /signup` - Register a user
/// - `POST /login` - Log in
///
/// Suitable for mounting at `/api`.
pub fn account_router() -> Router<AccountAppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

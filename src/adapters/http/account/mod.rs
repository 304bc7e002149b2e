//! Account HTTP adapter - signup and login.
//!
//! - `POST /api/signup` - Register a username and password
//! - `POST /api/login` - Log in and receive a placeholder token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::AccountAppState;
pub use routes::account_router;

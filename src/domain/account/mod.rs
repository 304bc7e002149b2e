//! Account module - user identity and credentials.
//!
//! A [`User`] is created once at signup and never changes afterwards.
//! The password digest is kept apart from the user in
//! [`UserCredentials`] so it cannot end up in a response by accident.

mod credentials;
mod ids;
mod token;
mod user;

pub use credentials::{Password, PasswordDigest};
pub use ids::{UserId, Username, MAX_USERNAME_LEN};
pub use token::AccessToken;
pub use user::{NewUser, User, UserCredentials};

//! Loginapp - user account service.
//!
//! Signup and login with hashed passwords, plus storage of a per-user list
//! of tool names that is always replaced as a whole.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

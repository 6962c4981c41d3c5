//! Authentication module for the authgate server
//!
//! This module owns password hashing and verification, credential
//! registration and login, and signed token issuance.

pub mod handlers;
mod password;
mod service;
mod token;
mod validation;

pub use service::{AuthRequest, CredentialManager};
pub use token::{Claims, IssuedToken, TokenIssuer};

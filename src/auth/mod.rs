//! Authentication module for managing user sessions and credentials.
//!
//! This module provides:
//! - `Session`: token-based session management with expiry tracking
//! - `CredentialStore`: OS-level credential storage via keyring
//!
//! Sessions are persisted to disk so a new process can reuse a still-valid
//! token instead of logging in again.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{Session, SessionData};

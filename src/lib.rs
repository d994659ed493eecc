//! Client library for the CourseHub course-management API.
//!
//! CourseHub exposes a small JSON-over-HTTP backend for authentication,
//! course catalog management, and enrollment. This crate wraps each backend
//! operation in a typed async method on [`ApiClient`]:
//!
//! - `POST /auth/login`, `POST /auth/signup` for account access
//! - `GET /courses`, `POST /courses`, `PUT /courses/{id}` for the catalog
//! - `POST /enroll/{courseId}`, `GET /enroll/my-courses` for enrollment
//!
//! Authenticated calls send a JWT bearer token held by the client itself.
//! Token persistence across runs is handled by [`auth::Session`], and the
//! password can be kept in the OS keychain through [`auth::CredentialStore`].

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{CredentialStore, Session, SessionData};
pub use config::Config;

//! REST API client module for the CourseHub backend.
//!
//! This module provides the `ApiClient` for talking to the CourseHub
//! service: login and signup, course catalog reads and writes, and
//! enrollment.
//!
//! Authenticated endpoints use a JWT bearer token obtained from the
//! `/auth/login` endpoint.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

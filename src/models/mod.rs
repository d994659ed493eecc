//! Data models for CourseHub entities.
//!
//! This module contains the data structures exchanged with the backend:
//!
//! - `Course`: catalog entries, also used as the create/update payload
//! - `Credentials`, `SignupRequest`: authentication payloads
//! - `AuthResponse`, `UserProfile`: what the auth endpoints return
//! - `Enrollment`, `EnrollmentReceipt`: enrollment records
//!
//! The backend does not publish a schema, so response types are lenient:
//! optional fields, `serde(default)`, and camelCase/`_id` renames.

pub mod course;
pub mod enrollment;
pub mod user;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentReceipt};
pub use user::{AuthResponse, Credentials, SignupRequest, UserProfile};

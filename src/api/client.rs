//! API client for communicating with the CourseHub REST API.
//!
//! This module provides the `ApiClient` struct for authenticating and for
//! making course catalog and enrollment requests.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::try_join;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionData;
use crate::models::{AuthResponse, Course, Credentials, EnrollmentReceipt, SignupRequest};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default base URL for the CourseHub backend.
/// The hosted deployment and the local dev server both listen on port 5000.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while still failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for CourseHub.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client pointing at the default backend
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new API client pointing at an explicit base URL.
    /// Useful for self-hosted deployments and for tests against a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    /// This is more efficient than building a new client per request.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    /// The bearer token currently attached to this client, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The base URL this client was built with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ===== Authentication =====

    /// Log in with raw credentials and return whatever the backend sent back.
    /// No Authorization header is attached, even if this client holds a token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let url = format!("{}/auth/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .context("Failed to send login request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse login response")
    }

    /// Register a new account. Like login, this is an unauthenticated call.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        let url = format!("{}/auth/signup", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to send signup request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse signup response")
    }

    /// Authenticate with CourseHub and return session data ready to persist.
    /// Fails if the backend reports success but the response carries no token.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<SessionData> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let auth = self.login(&credentials).await?;

        let token = auth.token.ok_or_else(|| {
            ApiError::InvalidResponse("Login response did not include a token".to_string())
        })?;

        Ok(SessionData {
            token,
            email: email.to_string(),
            user_id: auth.user.as_ref().and_then(|u| u.id.clone()),
            created_at: Utc::now(),
        })
    }

    // ===== Course catalog =====

    /// Fetch the full course catalog
    pub async fn fetch_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{}/courses", self.base_url);
        self.get_course_list(&url).await
    }

    /// Create a new course in the catalog
    pub async fn add_course(&self, course: &Course) -> Result<Course> {
        let url = format!("{}/courses", self.base_url);
        let text = self.post_for_text(&url, course).await?;
        Self::parse_course(&text)
    }

    /// Update an existing course by id
    pub async fn update_course(&self, id: &str, course: &Course) -> Result<Course> {
        let url = format!("{}/courses/{}", self.base_url, id);

        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers()?)
            .json(course)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        let response = Self::check_response(response).await?;

        let text = response
            .text()
            .await
            .context("Failed to read update course response body")?;
        Self::parse_course(&text)
    }

    // ===== Enrollment =====

    /// Enroll the authenticated user in a course
    pub async fn enroll(&self, course_id: &str) -> Result<EnrollmentReceipt> {
        let url = format!("{}/enroll/{}", self.base_url, course_id);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .context("Failed to parse enrollment response")
    }

    /// Fetch the courses the authenticated user is enrolled in
    pub async fn fetch_my_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{}/enroll/my-courses", self.base_url);
        self.get_course_list(&url).await
    }

    /// Fetch the catalog and the user's enrolled courses together.
    /// The two requests stay independent round trips; neither blocks the other.
    pub async fn fetch_enrollment_overview(&self) -> Result<(Vec<Course>, Vec<Course>)> {
        try_join(self.fetch_courses(), self.fetch_my_courses()).await
    }

    // ===== Request plumbing =====

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Authenticated POST returning the raw body for lenient parsing
    async fn post_for_text<B: Serialize>(&self, url: &str, body: &B) -> Result<String> {
        let response = self
            .client
            .post(url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    /// GET a course list, tolerating both a bare array and a wrapped object
    async fn get_course_list(&self, url: &str) -> Result<Vec<Course>> {
        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        debug!(url = url, "Course list response received");

        Self::parse_course_list(&text)
    }

    /// Parse a course list response.
    /// The backend has returned both a bare array and `{"courses": [...]}` /
    /// `{"data": [...]}` wrappers across versions, so try each in turn.
    fn parse_course_list(text: &str) -> Result<Vec<Course>> {
        if let Ok(courses) = serde_json::from_str::<Vec<Course>>(text) {
            return Ok(courses);
        }

        if let Ok(wrapper) = serde_json::from_str::<CourseListWrapper>(text) {
            if let Some(courses) = wrapper.courses {
                return Ok(courses);
            }
            if let Some(data) = wrapper.data {
                return Ok(data);
            }
        }

        warn!("Failed to parse course list response");
        Err(anyhow::anyhow!(
            "Failed to parse course list. Response starts with: {}",
            &text[..text.len().min(200)]
        ))
    }

    /// Parse a single-course response, bare or wrapped in `{"course": ...}`.
    /// The wrapper is checked first: every field on `Course` is optional, so
    /// a wrapped response would otherwise decode as an empty bare course.
    fn parse_course(text: &str) -> Result<Course> {
        if let Ok(CourseWrapper {
            course: Some(course),
        }) = serde_json::from_str::<CourseWrapper>(text)
        {
            return Ok(course);
        }

        let course: Course =
            serde_json::from_str(text).context("Failed to parse course response")?;
        if course.id.is_none() && course.title.is_none() {
            return Err(anyhow::anyhow!(
                "Course response did not include a course object"
            ));
        }
        Ok(course)
    }
}

// Internal API response types for parsing

#[derive(Debug, Clone, Deserialize)]
struct CourseListWrapper {
    courses: Option<Vec<Course>>,
    data: Option<Vec<Course>>,
}

#[derive(Debug, Clone, Deserialize)]
struct CourseWrapper {
    #[serde(default)]
    course: Option<Course>,
}

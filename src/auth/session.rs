use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

/// Token lifetime in minutes.
/// CourseHub issues JWTs with a one-hour expiry.
const TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Buffer before expiry at which a session counts as needing refresh
const TOKEN_REFRESH_BUFFER_MINUTES: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub email: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn is_expired(&self) -> bool {
        let expiry = self.created_at + Duration::minutes(TOKEN_EXPIRY_MINUTES);
        Utc::now() > expiry
    }

    /// Check if the session will expire soon and should be refreshed
    pub fn needs_refresh(&self) -> bool {
        let refresh_at = self.created_at
            + Duration::minutes(TOKEN_EXPIRY_MINUTES - TOKEN_REFRESH_BUFFER_MINUTES);
        Utc::now() > refresh_at
    }

    pub fn time_until_expiry(&self) -> Duration {
        let expiry = self.created_at + Duration::minutes(TOKEN_EXPIRY_MINUTES);
        expiry - Utc::now()
    }

    /// Minutes remaining until expiry, clamped at zero for display
    pub fn minutes_until_expiry(&self) -> i64 {
        self.time_until_expiry().num_minutes().max(0)
    }
}

pub struct Session {
    cache_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            data: None,
        }
    }

    /// Load session from disk. Returns true if a non-expired session was found.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;

            if !data.is_expired() {
                self.data = Some(data);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Clear session data and remove the session file
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Update session with new data
    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// Get the bearer token if a session is present
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.token.as_str())
    }

    /// Check if session is valid (exists and not expired)
    pub fn is_valid(&self) -> bool {
        self.data.as_ref().map(|d| !d.is_expired()).unwrap_or(false)
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_data(age_minutes: i64) -> SessionData {
        SessionData {
            token: "tok".to_string(),
            email: "grace@example.com".to_string(),
            user_id: Some("64aa01".to_string()),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_fresh_session_is_valid() {
        let data = session_data(0);
        assert!(!data.is_expired());
        assert!(!data.needs_refresh());
        assert!(data.minutes_until_expiry() > 50);
    }

    #[test]
    fn test_old_session_is_expired() {
        let data = session_data(61);
        assert!(data.is_expired());
        assert_eq!(data.minutes_until_expiry(), 0);
    }

    #[test]
    fn test_aging_session_needs_refresh() {
        let data = session_data(56);
        assert!(!data.is_expired());
        assert!(data.needs_refresh());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = std::env::temp_dir()
            .join("coursehub-session-test")
            .join(std::process::id().to_string());

        let mut session = Session::new(dir.clone());
        session.update(session_data(1));
        session.save().expect("save should succeed");

        let mut restored = Session::new(dir.clone());
        assert!(restored.load().expect("load should succeed"));
        assert_eq!(restored.token(), Some("tok"));
        assert!(restored.is_valid());

        restored.clear().expect("clear should succeed");
        let mut empty = Session::new(dir);
        assert!(!empty.load().expect("load of cleared session should succeed"));
    }

    #[test]
    fn test_expired_session_not_loaded() {
        let dir = std::env::temp_dir()
            .join("coursehub-expired-test")
            .join(std::process::id().to_string());

        let mut session = Session::new(dir.clone());
        session.update(session_data(120));
        session.save().expect("save should succeed");

        let mut restored = Session::new(dir);
        assert!(!restored.load().expect("load should succeed"));
        assert!(restored.token().is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Login payload for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `/auth/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// "student" or "instructor"; the backend defaults to student when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// What `/auth/login` and `/auth/signup` return.
/// Every field is optional: signup on some deployments returns only a
/// message, while login returns a token and the user record.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_response() {
        let json = r#"{
            "token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
            "user": {"_id": "64aa01", "name": "Grace", "email": "grace@example.com", "role": "student"}
        }"#;

        let auth: AuthResponse = serde_json::from_str(json).expect("login response should parse");
        assert_eq!(auth.token.as_deref(), Some("eyJhbGciOiJIUzI1NiJ9.e30.sig"));
        let user = auth.user.expect("user record expected");
        assert_eq!(user.id.as_deref(), Some("64aa01"));
        assert_eq!(user.role.as_deref(), Some("student"));
    }

    #[test]
    fn test_parse_message_only_response() {
        let json = r#"{"message": "User registered successfully"}"#;
        let auth: AuthResponse = serde_json::from_str(json).expect("message response should parse");
        assert!(auth.token.is_none());
        assert_eq!(auth.message.as_deref(), Some("User registered successfully"));
    }

    #[test]
    fn test_signup_request_omits_missing_role() {
        let request = SignupRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "hunter2".to_string(),
            role: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("role"));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id", alias = "id")]
    pub id: Option<String>,
    #[serde(rename = "courseId", alias = "course")]
    pub course_id: Option<String>,
    #[serde(rename = "userId", alias = "user")]
    pub user_id: Option<String>,
    #[serde(rename = "enrolledAt")]
    pub enrolled_at: Option<String>,
}

/// What `POST /enroll/{courseId}` returns
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enrollment_receipt() {
        let json = r#"{
            "message": "Enrolled successfully",
            "enrollment": {
                "_id": "66501f",
                "courseId": "665f1a",
                "userId": "64aa01",
                "enrolledAt": "2026-02-03T18:00:00.000Z"
            }
        }"#;

        let receipt: EnrollmentReceipt = serde_json::from_str(json).expect("receipt should parse");
        assert_eq!(receipt.message.as_deref(), Some("Enrolled successfully"));
        let enrollment = receipt.enrollment.expect("enrollment record expected");
        assert_eq!(enrollment.course_id.as_deref(), Some("665f1a"));
    }

    #[test]
    fn test_parse_message_only_receipt() {
        let json = r#"{"message": "Already enrolled"}"#;
        let receipt: EnrollmentReceipt = serde_json::from_str(json).expect("receipt should parse");
        assert!(receipt.enrollment.is_none());
    }
}

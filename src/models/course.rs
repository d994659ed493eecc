use serde::{Deserialize, Serialize};

/// A catalog course.
///
/// The same struct is sent as the create/update payload. Only fields that
/// are set serialize, so a partial update does not clobber server-side
/// fields the caller never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Course {
    /// Display label for lists and log lines
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled course)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_course() {
        let json = r#"{
            "_id": "665f1ab2c1d4e80012ab34cd",
            "title": "Intro to Rust",
            "description": "Ownership, borrowing, and the rest",
            "instructor": "Ada Lovelace",
            "category": "programming",
            "price": 49.0,
            "createdAt": "2026-01-12T09:30:00.000Z",
            "__v": 0
        }"#;

        let course: Course = serde_json::from_str(json).expect("course should parse");
        assert_eq!(course.id.as_deref(), Some("665f1ab2c1d4e80012ab34cd"));
        assert_eq!(course.display_title(), "Intro to Rust");
        assert_eq!(course.price, Some(49.0));
    }

    #[test]
    fn test_sparse_course_serializes_sparse() {
        let course = Course {
            title: Some("Databases".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(json, r#"{"title":"Databases"}"#);
    }

    #[test]
    fn test_display_title_fallback() {
        let course = Course::default();
        assert_eq!(course.display_title(), "(untitled course)");
    }
}

use serde::{Deserialize, Serialize};

/// Form body of `POST /add`. Fields are strings so that a missing or
/// malformed value reaches validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct AddStudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub department: String,
}

/// `?id=` of `GET /delete`, or the body of `POST /delete`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteStudentRequest {
    pub id: Option<String>,
}

/// Body of `POST /` used by the inline page.
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    pub action: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub department: String,
    pub id: Option<String>,
}

/// Outcome of the last submission, carried to `GET /` in the query string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BannerQuery {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            success: Some(msg.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(msg.into()),
        }
    }

    /// `/` followed by the encoded banner, or just `/` when there is none.
    pub fn location(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(q) if !q.is_empty() => format!("/?{q}"),
            _ => "/".to_owned(),
        }
    }
}

//! Tutor service wire types
//!
//! Structs that mirror the `/teach` JSON request and response.
//! Used to serialize requests and deserialize responses into typed Rust structs.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /teach`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TeachRequest {
    /// Topic the user wants explained
    pub subject: String,
}

/// Response body of `POST /teach`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TutorResponse {
    /// Explanation, formatted as markdown
    pub response: String,
    /// Raw provenance string with embedded `(Source: ...)` / `(Region: ...)` tags
    ///
    /// Absent or `null` in the payload becomes an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_data: String,
    /// Optional image reference illustrating the explanation
    #[serde(default)]
    pub visual_aid: Option<String>,
}

impl TutorResponse {
    /// Image reference, if the service sent a non-empty one
    pub fn visual_aid(&self) -> Option<&str> {
        self.visual_aid.as_deref().filter(|url| !url.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

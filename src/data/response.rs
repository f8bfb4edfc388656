//! Wire format of the category list endpoint.
//!
//! ```json
//! { "trivia_categories": [ { "id": 9, "name": "General Knowledge" } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::FetchError;

/// Body of a category list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategoryList {
    #[serde(rename = "trivia_categories")]
    pub items: Vec<RawCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: i64,
    pub name: String,
}

impl RawCategoryList {
    /// Parse a response body. Any shape mismatch is a serialization error.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}

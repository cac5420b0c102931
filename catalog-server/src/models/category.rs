//! Category records and name validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::non_empty_text;
use super::ValidationError;

/// Maximum length for category names
const MAX_NAME_LEN: usize = 128;

/// Category record as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Validated category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new category name.
    ///
    /// # Rules
    /// - Present and not blank (whitespace-only is rejected)
    /// - Max 128 characters
    ///
    /// The name is kept exactly as given, so lookups must use the same
    /// text. Names are not required to be unique.
    ///
    /// # Example
    /// ```
    /// use catalog_server::models::CategoryName;
    ///
    /// assert!(CategoryName::new("Books").is_ok());
    /// assert!(CategoryName::new("").is_err());
    /// assert!(CategoryName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty_text(s, "name", MAX_NAME_LEN).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(CategoryName::new("Books").unwrap().as_str(), "Books");
        assert_eq!(
            CategoryName::new("men's clothing").unwrap().into_string(),
            "men's clothing"
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(CategoryName::new(" Books ").unwrap().as_str(), " Books ");
    }

    #[test]
    fn rejects_empty() {
        let err = CategoryName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn max_length() {
        assert!(CategoryName::new(&"a".repeat(128)).is_ok());

        let err = CategoryName::new(&"a".repeat(129)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 128, .. }));
    }

    #[test]
    fn serializes_camel_case() {
        let category = Category {
            id: Uuid::nil(),
            name: "Books".into(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["name"], "Books");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("createdAt").is_some());
    }
}

//! Student records and name validation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required;
use super::ValidationError;

/// Student row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
}

/// Validated (trimmed, non-blank) student name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    /// # Example
    /// ```
    /// use ric_server::models::StudentName;
    ///
    /// assert_eq!(StudentName::new(" Ada ").unwrap().as_str(), "Ada");
    /// assert!(StudentName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required(s)
            .map(Self)
            .ok_or(ValidationError::Required { field: "name" })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(StudentName::new("\tGrace Hopper  ").unwrap().as_str(), "Grace Hopper");
    }

    #[test]
    fn rejects_empty() {
        let err = StudentName::new("").unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name" });
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(StudentName::new(" \n ").is_err());
    }
}

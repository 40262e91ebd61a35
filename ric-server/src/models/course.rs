//! Course records and the validated create/replace payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required;
use super::ValidationError;

/// Course row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub code: String,
    pub title: String,
}

/// Code and title for a new course or a full replace of an existing one.
///
/// Both fields are trimmed; neither may be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    code: String,
    title: String,
}

impl CourseDraft {
    /// Validate a code/title pair.
    ///
    /// # Example
    /// ```
    /// use ric_server::models::CourseDraft;
    ///
    /// let draft = CourseDraft::new(" CS101 ", "Intro").unwrap();
    /// assert_eq!(draft.code(), "CS101");
    /// assert!(CourseDraft::new("CS101", "   ").is_err());
    /// ```
    pub fn new(code: &str, title: &str) -> Result<Self, ValidationError> {
        match (required(code), required(title)) {
            (Some(code), Some(title)) => Ok(Self { code, title }),
            _ => Err(ValidationError::RequiredAll {
                fields: &["code", "title"],
            }),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attach a store-assigned id.
    pub fn into_course(self, id: i32) -> Course {
        Course {
            id,
            code: self.code,
            title: self.title,
        }
    }
}

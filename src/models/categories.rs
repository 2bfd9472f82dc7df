use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::Validate;

use super::Payload;

/// A browsable engineering category. `slug` is the lookup key projects point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Symbolic glyph name picked by the UI (`code`, `cpu`, `radio`, ...).
    pub icon: String,
    /// Display number only; never recomputed from the project table.
    pub project_count: i32,
}

// ── DTOs ──

/// Validated insert shape for a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub project_count: i32,
}

impl NewCategory {
    pub fn into_record(self, id: Uuid) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            icon: self.icon,
            project_count: self.project_count,
        }
    }
}

/// Body of `POST /api/categories`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub icon: Option<String>,
    pub project_count: Option<i32>,
}

/// Slugs are URL-safe: ASCII letters, digits, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    // An empty slug is already reported by the length rule.
    if slug.is_empty() || is_valid_slug(slug) {
        return Ok(());
    }
    Err(validator::ValidationError::new("slug").with_message(Cow::Borrowed(
        "Slug may only contain letters, digits, '-' and '_'",
    )))
}

impl Payload for CreateCategory {
    type Insert = NewCategory;

    fn into_insert(self) -> NewCategory {
        NewCategory {
            name: self.name.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            icon: self.icon.unwrap_or_default(),
            project_count: self.project_count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_insert;

    fn payload(slug: &str) -> CreateCategory {
        CreateCategory {
            name: Some("AI / ML".into()),
            slug: Some(slug.into()),
            description: Some("Machine learning projects.".into()),
            icon: Some("brain".into()),
            project_count: None,
        }
    }

    #[test]
    fn slug_shape() {
        assert!(is_valid_slug("it"));
        assert!(is_valid_slug("nonexistent-slug"));
        assert!(is_valid_slug("final_year"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("it cs"));
        assert!(!is_valid_slug("ai.ml"));
        assert!(!is_valid_slug("../etc"));
    }

    #[test]
    fn off_charset_slug_is_rejected_on_create() {
        let err = validate_insert(payload("ai.ml")).unwrap_err();
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details[0].field, "slug");
        assert_eq!(err.details[0].code, "slug");

        assert_eq!(validate_insert(payload("ai-ml")).unwrap().slug, "ai-ml");
    }

    #[test]
    fn empty_slug_reports_required_once() {
        let err = validate_insert(payload("")).unwrap_err();
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details[0].code, "required");
    }
}

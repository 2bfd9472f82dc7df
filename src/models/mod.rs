pub mod categories;
pub mod custom_requests;
pub mod inquiries;
pub mod projects;
pub mod testimonials;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

/// A client-supplied create body that can be checked and narrowed into the
/// exact insert shape a store accepts.
pub trait Payload: Validate {
    type Insert;

    /// Only called after `validate()` succeeded.
    fn into_insert(self) -> Self::Insert;
}

/// Validate a create payload and normalize it into its insert shape.
///
/// Every violated field is reported, not just the first one. Server-assigned
/// fields (`id`, `status`) are never part of a payload, so they are dropped
/// during deserialization along with any other unknown key.
pub fn validate_insert<P: Payload>(payload: P) -> Result<P::Insert, ValidationError> {
    payload.validate()?;
    Ok(payload.into_insert())
}

/// One violated field in a create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Field-level validation failure for a create payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed on {} field(s)", .details.len())]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = camel_case(&field);
                errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}")),
                })
            })
            .collect();

        // HashMap order is random; keep responses stable.
        details.sort_by(|a, b| a.field.cmp(&b.field));
        Self { details }
    }
}

/// Wire names are camelCase, Rust field names are snake_case.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Deserialize an optional text field, treating `""` (and whitespace) as absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{Payload, blank_as_none};

/// Lifecycle of a custom request.
///
/// Only `Pending` is ever assigned here; the other values belong to the admin
/// side and no operation transitions between them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

/// Detailed lead from the custom-project form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRequest {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub whatsapp: String,
    pub branch: String,
    pub project_title: Option<String>,
    pub requirements: String,
    pub technologies: Option<Vec<String>>,
    /// Free text as typed by the student, never parsed as a date.
    pub deadline: Option<String>,
    pub budget: Option<String>,
    pub additional_notes: Option<String>,
    pub status: RequestStatus,
}

// ── DTOs ──

/// Validated insert shape. Carries no status: the store pins it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomRequest {
    pub name: String,
    pub email: Option<String>,
    pub whatsapp: String,
    pub branch: String,
    pub project_title: Option<String>,
    pub requirements: String,
    pub technologies: Option<Vec<String>>,
    pub deadline: Option<String>,
    pub budget: Option<String>,
    pub additional_notes: Option<String>,
}

impl NewCustomRequest {
    /// Build the stored record. Status always starts as `Pending`.
    pub fn into_record(self, id: Uuid) -> CustomRequest {
        CustomRequest {
            id,
            name: self.name,
            email: self.email,
            whatsapp: self.whatsapp,
            branch: self.branch,
            project_title: self.project_title,
            requirements: self.requirements,
            technologies: self.technologies,
            deadline: self.deadline,
            budget: self.budget,
            additional_notes: self.additional_notes,
            status: RequestStatus::Pending,
        }
    }
}

/// Body of `POST /api/custom-requests`. A `status` key in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomRequest {
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 10, message = "WhatsApp number must be at least 10 digits")
    )]
    pub whatsapp: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub branch: Option<String>,
    pub project_title: Option<String>,
    #[validate(
        required(message = "Required"),
        length(
            min = 20,
            message = "Please provide detailed requirements (min 20 characters)"
        )
    )]
    pub requirements: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub deadline: Option<String>,
    pub budget: Option<String>,
    pub additional_notes: Option<String>,
}

impl Payload for CreateCustomRequest {
    type Insert = NewCustomRequest;

    fn into_insert(self) -> NewCustomRequest {
        NewCustomRequest {
            name: self.name.unwrap_or_default(),
            email: self.email,
            whatsapp: self.whatsapp.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            project_title: self.project_title,
            requirements: self.requirements.unwrap_or_default(),
            technologies: self.technologies,
            deadline: self.deadline,
            budget: self.budget,
            additional_notes: self.additional_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_insert;

    fn payload(requirements: &str) -> CreateCustomRequest {
        CreateCustomRequest {
            name: Some("Ravi".into()),
            whatsapp: Some("9123456780".into()),
            branch: Some("Mechanical".into()),
            requirements: Some(requirements.into()),
            ..Default::default()
        }
    }

    #[test]
    fn requirements_boundary_is_twenty_characters() {
        let nineteen = "a".repeat(19);
        let err = validate_insert(payload(&nineteen)).unwrap_err();
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details[0].field, "requirements");

        let twenty = "a".repeat(20);
        assert!(validate_insert(payload(&twenty)).is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut input = payload("A drone that maps crop health");
        input.email = Some("not-an-email".into());
        let err = validate_insert(input).unwrap_err();
        assert_eq!(err.details[0].field, "email");
        assert_eq!(err.details[0].message, "Invalid email");
    }

    #[test]
    fn blank_email_is_absent_other_text_is_kept() {
        let input: CreateCustomRequest = serde_json::from_value(serde_json::json!({
            "name": "Ravi",
            "email": "",
            "whatsapp": "9123456780",
            "branch": "Mechanical",
            "projectTitle": "",
            "requirements": "A drone that maps crop health",
            "status": "completed",
        }))
        .unwrap();
        let insert = validate_insert(input).unwrap();
        assert_eq!(insert.email, None);
        assert_eq!(insert.project_title.as_deref(), Some(""));
    }

    #[test]
    fn record_starts_pending() {
        let insert = validate_insert(payload("A drone that maps crop health")).unwrap();
        let record = insert.into_record(Uuid::new_v4());
        assert_eq!(record.status, RequestStatus::Pending);
        assert_eq!(
            serde_json::to_value(record.status).unwrap(),
            serde_json::json!("pending")
        );
    }

    #[test]
    fn status_vocabulary_is_snake_case() {
        assert_eq!(
            serde_json::to_value(RequestStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
    }
}

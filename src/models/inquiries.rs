use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Payload;

/// Lightweight lead from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub branch: String,
    pub whatsapp: String,
    pub requirement: String,
}

// ── DTOs ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub branch: String,
    pub whatsapp: String,
    pub requirement: String,
}

impl NewInquiry {
    pub fn into_record(self, id: Uuid) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            branch: self.branch,
            whatsapp: self.whatsapp,
            requirement: self.requirement,
        }
    }
}

/// Body of `POST /api/inquiries`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub branch: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 10, message = "WhatsApp number must be at least 10 digits")
    )]
    pub whatsapp: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 10, message = "Please provide your requirement")
    )]
    pub requirement: Option<String>,
}

impl Payload for CreateInquiry {
    type Insert = NewInquiry;

    fn into_insert(self) -> NewInquiry {
        NewInquiry {
            name: self.name.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            whatsapp: self.whatsapp.unwrap_or_default(),
            requirement: self.requirement.unwrap_or_default(),
        }
    }
}

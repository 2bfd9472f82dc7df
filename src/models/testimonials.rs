use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Payload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub student_name: String,
    pub college: String,
    pub quote: String,
    /// Expected 1..=5 but not range-checked.
    pub rating: i32,
    pub project_category: String,
    pub avatar_url: Option<String>,
}

// ── DTOs ──

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub student_name: String,
    pub college: String,
    pub quote: String,
    pub rating: i32,
    pub project_category: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewTestimonial {
    pub fn into_record(self, id: Uuid) -> Testimonial {
        Testimonial {
            id,
            student_name: self.student_name,
            college: self.college,
            quote: self.quote,
            rating: self.rating,
            project_category: self.project_category,
            avatar_url: self.avatar_url,
        }
    }
}

/// Body of `POST /api/testimonials`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub student_name: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub college: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub quote: Option<String>,
    #[validate(required(message = "Required"))]
    pub rating: Option<i32>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub project_category: Option<String>,
    pub avatar_url: Option<String>,
}

impl Payload for CreateTestimonial {
    type Insert = NewTestimonial;

    fn into_insert(self) -> NewTestimonial {
        NewTestimonial {
            student_name: self.student_name.unwrap_or_default(),
            college: self.college.unwrap_or_default(),
            quote: self.quote.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            project_category: self.project_category.unwrap_or_default(),
            avatar_url: self.avatar_url,
        }
    }
}

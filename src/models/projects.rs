use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Payload;

/// A pre-built project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Slug of a category. Advisory only: dangling slugs are tolerated.
    pub category: String,
    pub branch: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    /// Decimal string, e.g. `"4999.00"`. The currency symbol is added at the edge.
    pub price: String,
    pub deliverables: Vec<String>,
    pub thumbnail: Option<String>,
    pub sample_ppt_url: Option<String>,
    /// Cosmetic counter, nothing increments it.
    pub popular: i32,
}

// ── DTOs ──

/// Validated insert shape for a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub branch: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub price: String,
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sample_ppt_url: Option<String>,
    #[serde(default)]
    pub popular: i32,
}

impl NewProject {
    pub fn into_record(self, id: Uuid) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            branch: self.branch,
            features: self.features,
            technologies: self.technologies,
            price: self.price,
            deliverables: self.deliverables,
            thumbnail: self.thumbnail,
            sample_ppt_url: self.sample_ppt_url,
            popular: self.popular,
        }
    }
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub category: Option<String>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub branch: Option<String>,
    #[validate(required(message = "Required"))]
    pub features: Option<Vec<String>>,
    #[validate(required(message = "Required"))]
    pub technologies: Option<Vec<String>>,
    #[validate(
        required(message = "Required"),
        length(min = 1, code = "required", message = "Required")
    )]
    pub price: Option<String>,
    #[validate(required(message = "Required"))]
    pub deliverables: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub sample_ppt_url: Option<String>,
    pub popular: Option<i32>,
}

impl Payload for CreateProject {
    type Insert = NewProject;

    fn into_insert(self) -> NewProject {
        NewProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            technologies: self.technologies.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            deliverables: self.deliverables.unwrap_or_default(),
            thumbnail: self.thumbnail,
            sample_ppt_url: self.sample_ppt_url,
            popular: self.popular.unwrap_or(0),
        }
    }
}

/// Query string accepted by `GET /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
}

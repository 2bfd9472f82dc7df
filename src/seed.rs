use serde::Deserialize;

use crate::db::{Storage, StoreError};
use crate::models::categories::NewCategory;
use crate::models::projects::NewProject;
use crate::models::testimonials::NewTestimonial;

/// The literal launch catalog.
const CATALOG_JSON: &str = include_str!("seed/catalog.json");

const DEFAULT_THUMBNAIL: &str =
    "/assets/generated_images/IT_Computer_Science_project_thumbnail_f71a1bbf.png";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("storage has already been seeded")]
    AlreadySeeded,

    #[error("bundled seed data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// How many records a seeding run inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub projects: usize,
    pub testimonials: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub categories: Vec<NewCategory>,
    pub projects: Vec<NewProject>,
    pub testimonials: Vec<NewTestimonial>,
}

impl SeedData {
    /// Parse the dataset compiled into the binary. Projects shipped without a
    /// thumbnail get their category's stock image.
    pub fn bundled() -> Result<Self, SeedError> {
        let mut data: SeedData = serde_json::from_str(CATALOG_JSON)?;
        for project in &mut data.projects {
            if project.thumbnail.is_none() {
                project.thumbnail = Some(default_thumbnail(&project.category).to_string());
            }
        }
        Ok(data)
    }
}

/// Stock image for a category slug, falling back to the IT image.
pub fn default_thumbnail(category: &str) -> &'static str {
    match category {
        "it" | "cs" => DEFAULT_THUMBNAIL,
        "ece" | "diploma" => "/assets/generated_images/ECE_Electronics_project_thumbnail_c7385ad9.png",
        "electrical" => {
            "/assets/generated_images/Electrical_engineering_project_thumbnail_32fc478c.png"
        }
        "mechanical" => {
            "/assets/generated_images/Mechanical_engineering_project_thumbnail_43cbef9f.png"
        }
        "civil" => "/assets/generated_images/Civil_engineering_project_thumbnail_d89a625e.png",
        _ => DEFAULT_THUMBNAIL,
    }
}

/// Populate `storage` with the bundled dataset. Runs once per storage:
/// a second call fails with [`SeedError::AlreadySeeded`] and inserts nothing.
///
/// Categories go in first, then projects (which reference category slugs),
/// then testimonials.
pub async fn seed(storage: &Storage) -> Result<SeedReport, SeedError> {
    seed_with(storage, SeedData::bundled()?).await
}

/// Same as [`seed`] with caller-supplied data.
pub async fn seed_with(storage: &Storage, data: SeedData) -> Result<SeedReport, SeedError> {
    if !storage.claim_seed() {
        tracing::warn!("Seeding skipped: storage already seeded");
        return Err(SeedError::AlreadySeeded);
    }

    let report = SeedReport {
        categories: data.categories.len(),
        projects: data.projects.len(),
        testimonials: data.testimonials.len(),
    };

    for category in data.categories {
        storage.catalog.create_category(category).await?;
    }
    for project in data.projects {
        storage.catalog.create_project(project).await?;
    }
    for testimonial in data.testimonials {
        storage.testimonials.create_testimonial(testimonial).await?;
    }

    tracing::info!(
        categories = report.categories,
        projects = report.projects,
        testimonials = report.testimonials,
        "Catalog seeded"
    );

    Ok(report)
}

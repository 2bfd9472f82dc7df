use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use super::memory::{MemTable, Record};
use crate::models::categories::{Category, NewCategory};
use crate::models::projects::{NewProject, Project};

/// Categories and projects. Read-only from the outside once seeded; there is
/// no update or delete.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_category(&self, input: NewCategory) -> Result<Category, StoreError>;
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StoreError>;
    /// Exact slug match; the first inserted wins if slugs were duplicated.
    async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError>;
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn create_project(&self, input: NewProject) -> Result<Project, StoreError>;
    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    /// Projects whose `category` equals `slug`. Empty when nothing matches.
    async fn list_projects_by_category(&self, slug: &str) -> Result<Vec<Project>, StoreError>;
}

impl Record for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Default)]
pub struct MemCatalog {
    categories: MemTable<Category>,
    projects: MemTable<Project>,
}

impl MemCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MemCatalog {
    async fn create_category(&self, input: NewCategory) -> Result<Category, StoreError> {
        Ok(self
            .categories
            .insert_with(|id| input.into_record(id))
            .await)
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.get(id).await)
    }

    async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.find(|c| c.slug == slug).await)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.all().await)
    }

    async fn create_project(&self, input: NewProject) -> Result<Project, StoreError> {
        Ok(self.projects.insert_with(|id| input.into_record(id)).await)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.get(id).await)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.all().await)
    }

    async fn list_projects_by_category(&self, slug: &str) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.filter(|p| p.category == slug).await)
    }
}

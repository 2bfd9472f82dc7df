use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::db::Storage;
use crate::error::{AppError, AppResult};
use crate::models::projects::{CreateProject, ProjectListQuery};
use crate::models::validate_insert;

/// GET /api/projects — all projects, or only those in `?category=<slug>`.
pub async fn get_projects(
    storage: web::Data<Storage>,
    query: web::Query<ProjectListQuery>,
) -> AppResult<HttpResponse> {
    let projects = match query.category.as_deref() {
        Some(slug) => storage.catalog.list_projects_by_category(slug).await?,
        None => storage.catalog.list_projects().await?,
    };
    Ok(HttpResponse::Ok().json(projects))
}

/// GET /api/projects/{id} — get a single project.
pub async fn get_project(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("Invalid project ID"))?;

    match storage.catalog.get_project(id).await? {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(AppError::NotFound("Project not found")),
    }
}

/// POST /api/projects — add a project to the catalog.
///
/// The category slug is stored as given; it does not have to resolve.
pub async fn create_project(
    storage: web::Data<Storage>,
    body: web::Json<CreateProject>,
) -> AppResult<HttpResponse> {
    let input =
        validate_insert(body.into_inner()).map_err(AppError::invalid("Invalid project data"))?;

    let project = storage.catalog.create_project(input).await?;
    tracing::info!(id = %project.id, category = %project.category, "Project created");
    Ok(HttpResponse::Created().json(project))
}

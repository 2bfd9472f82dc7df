use actix_web::{HttpResponse, web};

use crate::db::Storage;
use crate::error::{AppError, AppResult};
use crate::models::categories::{CreateCategory, is_valid_slug};
use crate::models::validate_insert;

/// GET /api/categories — every category in insertion order.
pub async fn get_categories(storage: web::Data<Storage>) -> AppResult<HttpResponse> {
    let categories = storage.catalog.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/categories/{slug} — look a category up by its slug.
pub async fn get_category_by_slug(
    storage: web::Data<Storage>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    if !is_valid_slug(&slug) {
        return Err(AppError::BadRequest("Invalid category slug"));
    }

    match storage.catalog.get_category_by_slug(&slug).await? {
        Some(category) => Ok(HttpResponse::Ok().json(category)),
        None => Err(AppError::NotFound("Category not found")),
    }
}

/// POST /api/categories — create a category.
pub async fn create_category(
    storage: web::Data<Storage>,
    body: web::Json<CreateCategory>,
) -> AppResult<HttpResponse> {
    let input =
        validate_insert(body.into_inner()).map_err(AppError::invalid("Invalid category data"))?;

    let category = storage.catalog.create_category(input).await?;
    tracing::info!(id = %category.id, slug = %category.slug, "Category created");
    Ok(HttpResponse::Created().json(category))
}

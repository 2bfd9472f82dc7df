use actix_web::{HttpResponse, web};

use super::preview;
use crate::db::Storage;
use crate::error::{AppError, AppResult};
use crate::models::custom_requests::CreateCustomRequest;
use crate::models::validate_insert;

/// GET /api/custom-requests — every custom request, oldest first.
pub async fn get_custom_requests(storage: web::Data<Storage>) -> AppResult<HttpResponse> {
    let requests = storage.leads.list_custom_requests().await?;
    Ok(HttpResponse::Ok().json(requests))
}

/// POST /api/custom-requests — submit the custom-project form.
///
/// The stored request is always `pending`, whatever the body says.
pub async fn create_custom_request(
    storage: web::Data<Storage>,
    body: web::Json<CreateCustomRequest>,
) -> AppResult<HttpResponse> {
    let input =
        validate_insert(body.into_inner()).map_err(AppError::invalid("Invalid request data"))?;

    let request = storage.leads.create_custom_request(input).await?;

    tracing::info!(
        id = %request.id,
        name = %request.name,
        branch = %request.branch,
        whatsapp = %request.whatsapp,
        email = request.email.as_deref(),
        project_title = request.project_title.as_deref(),
        deadline = request.deadline.as_deref(),
        budget = request.budget.as_deref(),
        status = ?request.status,
        requirements = %preview(&request.requirements),
        "New custom project request received"
    );

    Ok(HttpResponse::Created().json(request))
}

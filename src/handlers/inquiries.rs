use actix_web::{HttpResponse, web};

use super::preview;
use crate::db::Storage;
use crate::error::{AppError, AppResult};
use crate::models::inquiries::CreateInquiry;
use crate::models::validate_insert;

/// GET /api/inquiries — every inquiry, oldest first. Not auth-gated here.
pub async fn get_inquiries(storage: web::Data<Storage>) -> AppResult<HttpResponse> {
    let inquiries = storage.leads.list_inquiries().await?;
    Ok(HttpResponse::Ok().json(inquiries))
}

/// POST /api/inquiries — submit the contact form.
pub async fn create_inquiry(
    storage: web::Data<Storage>,
    body: web::Json<CreateInquiry>,
) -> AppResult<HttpResponse> {
    let input =
        validate_insert(body.into_inner()).map_err(AppError::invalid("Invalid inquiry data"))?;

    let inquiry = storage.leads.create_inquiry(input).await?;

    tracing::info!(
        id = %inquiry.id,
        name = %inquiry.name,
        branch = %inquiry.branch,
        whatsapp = %inquiry.whatsapp,
        requirement = %preview(&inquiry.requirement),
        "New inquiry received"
    );

    Ok(HttpResponse::Created().json(inquiry))
}

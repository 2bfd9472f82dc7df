use actix_web::{HttpResponse, web};

use crate::db::Storage;
use crate::error::{AppError, AppResult};
use crate::models::testimonials::CreateTestimonial;
use crate::models::validate_insert;

/// GET /api/testimonials
pub async fn get_testimonials(storage: web::Data<Storage>) -> AppResult<HttpResponse> {
    let testimonials = storage.testimonials.list_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

/// POST /api/testimonials
pub async fn create_testimonial(
    storage: web::Data<Storage>,
    body: web::Json<CreateTestimonial>,
) -> AppResult<HttpResponse> {
    let input = validate_insert(body.into_inner())
        .map_err(AppError::invalid("Invalid testimonial data"))?;

    let testimonial = storage.testimonials.create_testimonial(input).await?;
    Ok(HttpResponse::Created().json(testimonial))
}

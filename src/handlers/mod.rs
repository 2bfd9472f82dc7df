pub mod admin;
pub mod categories;
pub mod custom_requests;
pub mod inquiries;
pub mod projects;
pub mod testimonials;

use actix_web::{HttpResponse, Responder, web};

use crate::error::AppError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Body errors (bad JSON, wrong field types) answer 400 in the usual error shape.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::MalformedBody(err.to_string()).into()),
    );

    cfg.route("/health", web::get().to(health));

    // ── Catalog (public) ──
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(categories::get_categories))
            .route("", web::post().to(categories::create_category))
            .route("/{slug}", web::get().to(categories::get_category_by_slug)),
    );
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::get_projects))
            .route("", web::post().to(projects::create_project))
            .route("/{id}", web::get().to(projects::get_project)),
    );
    cfg.service(
        web::resource("/testimonials")
            .route(web::get().to(testimonials::get_testimonials))
            .route(web::post().to(testimonials::create_testimonial)),
    );

    // ── Leads (submissions are public; the lists are the admin export surface) ──
    cfg.service(
        web::resource("/inquiries")
            .route(web::get().to(inquiries::get_inquiries))
            .route(web::post().to(inquiries::create_inquiry)),
    );
    cfg.service(
        web::resource("/custom-requests")
            .route(web::get().to(custom_requests::get_custom_requests))
            .route(web::post().to(custom_requests::create_custom_request)),
    );

    // ── Admin session ──
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(admin::login))
            .route("/me", web::get().to(admin::me)),
    );
}

/// GET /api/health — liveness check.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Shorten long free text for log lines.
pub(crate) fn preview(text: &str) -> String {
    const LIMIT: usize = 100;
    match text.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_past_one_hundred_chars() {
        let long = "é".repeat(150);
        let short = preview(&long);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 103);
        assert_eq!(preview("short"), "short");
    }
}

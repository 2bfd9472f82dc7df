use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Service;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use std::time::Instant;
use techfinalyear_backend::auth::middleware::AdminKeys;
use techfinalyear_backend::config::{AppConfig, is_allowed_origin};
use techfinalyear_backend::create_storage;
use techfinalyear_backend::handlers;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env();

    // Seed before binding so the first request already sees the full catalog.
    let (storage, report) = create_storage()
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to seed storage: {e}")))?;
    tracing::info!(
        categories = report.categories,
        projects = report.projects,
        "In-memory storage ready"
    );
    let storage_data = web::Data::new(storage);

    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set; admin login is disabled");
    }
    let admin_keys = web::Data::new(AdminKeys {
        password: config.admin_password.clone(),
        jwt_secret: config.jwt_secret.clone(),
        token_ttl: config.admin_token_ttl,
    });

    let serve_assets = config.assets_dir.is_dir();
    if !serve_assets {
        tracing::warn!(dir = %config.assets_dir.display(), "Assets directory missing; /assets disabled");
    }

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let origins = config.allowed_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req| {
                origin
                    .to_str()
                    .map(|o| is_allowed_origin(o, &origins))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        let app = App::new()
            .wrap(cors)
            .wrap_fn(|req, srv| {
                let method = req.method().clone();
                let path = req.path().to_string();
                let started = Instant::now();
                let fut = srv.call(req);
                async move {
                    let res = fut.await?;
                    if path.starts_with("/api") {
                        tracing::info!(
                            %method,
                            %path,
                            status = res.status().as_u16(),
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "request"
                        );
                    }
                    Ok(res)
                }
            })
            .app_data(storage_data.clone())
            .app_data(admin_keys.clone())
            .service(web::scope("/api").configure(handlers::init_routes));

        if serve_assets {
            app.service(Files::new("/assets", config.assets_dir.clone()))
        } else {
            app
        }
    })
    .bind(&bind_addr)?
    .run()
    .await
}

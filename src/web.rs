use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use tracing_actix_web::TracingLogger;

use crate::services::projects::ProjectRepository;

pub mod errors;
pub mod handlers;
pub mod templates;

/// Each path answers its own methods; any other method gets 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::index))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/projects")
            .route(web::get().to(handlers::list_projects))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/projects/new")
            .route(web::get().to(handlers::new_project_form))
            .route(web::post().to(handlers::create_project))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/projects/view")
            .route(web::get().to(handlers::view_project))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/projects/delete")
            .route(web::get().to(handlers::delete_project))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}

/// Serves the web application until the process is interrupted.
pub async fn serve(repository: ProjectRepository, host: &str, port: u16) -> std::io::Result<()> {
    let repository = web::Data::new(repository);

    tracing::info!(
        "Starting {} v{} on {}:{}",
        templates::APP_NAME,
        env!("CARGO_PKG_VERSION"),
        host,
        port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

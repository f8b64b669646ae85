//! HTTP handlers and route configuration.

pub mod auth;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/functions/v1")
                // Any method reaches the auth function.
                .route("/face-auth", web::route().to(auth::face_auth)),
        );
}

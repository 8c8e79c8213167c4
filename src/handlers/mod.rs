pub mod assistant_handler;
pub mod diagnostic_handler;
pub mod health_handler;

use actix_web::{web, HttpRequest};

use crate::errors::AppError;

pub use assistant_handler::{assistant_reply, method_not_allowed};
pub use diagnostic_handler::{get_diagnostic, score_diagnostic};
pub use health_handler::{health_check, health_check_live, health_check_ready};

fn json_error_handler(err: actix_web::error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    AppError::from(err).into()
}

/// Registers every route; shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/api/assistant")
                .route(web::post().to(assistant_reply))
                .default_service(web::to(method_not_allowed)),
        )
        .service(get_diagnostic)
        .service(score_diagnostic)
        .service(health_check)
        .service(health_check_ready)
        .service(health_check_live);
}

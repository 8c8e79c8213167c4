use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use bottleneck_diagnostic::{
    app_state::AppState, config::Config,
    constants::diagnostic_questions::standard_question_bank, handlers,
    middleware::RequestIdMiddleware,
};

fn build_cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.warn_on_missing_secrets();

    let bank = standard_question_bank();
    log::info!("Loaded {} validated diagnostic questions", bank.len());

    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;

    log::info!(
        "Starting HTTP server on {}:{} (model: {})",
        config.web_server_host,
        config.web_server_port,
        config.gemini_model
    );

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(build_cors(&server_config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}

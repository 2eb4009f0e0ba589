use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

mod comment;
mod config;
mod database;
mod middleware;
mod router;
#[cfg(test)]
mod testing;
mod user;
mod utils;

use comment::service::CommentService;
use config::AppConfig;
use database::{RedisClient, RedisService};
use middleware::error_handler::handle_error;
use middleware::not_found::not_found;
use router::index::routes;
use serde_json::json;
use utils::helpers::service_name;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the comment service",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let mongo_client = database::connect_to_mongo(&config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let comment_service = web::Data::new(CommentService::new(
        &mongo_client,
        &config.database_name,
    ));

    let redis_service = match &config.redis_url {
        Some(url) => match RedisClient::init(url).await {
            Ok(client) => Some(web::Data::new(RedisService::new(&client))),
            Err(e) => {
                warn!("{}; session checks disabled", e);
                None
            }
        },
        None => None,
    };

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(comment_service.clone());

        if let Some(redis) = &redis_service {
            app = app.app_data(redis.clone());
        }

        app.configure(routes)
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, not_found)
                    .default_handler(handle_error),
            )
            .service(default)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}

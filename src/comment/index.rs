use super::controller::{create_comment, delete_comment, get_all_comments, update_comment};
use crate::middleware::auth::verify_token;
use crate::middleware::error_handler::json_error_handler;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .wrap(HttpAuthentication::bearer(verify_token))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::post().to(create_comment))
            .route("", web::get().to(get_all_comments))
            .route("/{comment_id}", web::put().to(update_comment))
            .route("/{comment_id}", web::delete().to(delete_comment)),
    );
}

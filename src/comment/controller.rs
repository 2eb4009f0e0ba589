use crate::comment::model::{CommentView, CreateCommentRequest, UpdateCommentRequest};
use crate::comment::service::CommentService;
use crate::middleware::auth::AuthUser;
use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Create a new comment
/// POST /comments
pub async fn create_comment(
    user: AuthUser,
    comment_service: web::Data<CommentService>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let comment = comment_service
        .create_comment(&user, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Comment created successfully",
        "httpStatusCode": 201,
        "service": service_name(),
        "data": CommentView::from(comment)
    })))
}

/// Get all comments, newest first
/// GET /comments
pub async fn get_all_comments(
    _user: AuthUser,
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, CustomError> {
    let comments = comment_service.list_comments().await?;
    let count = comments.len();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comments retrieved successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "count": count,
        "data": comments
    })))
}

/// Update a comment
/// PUT /comments/{comment_id}
pub async fn update_comment(
    user: AuthUser,
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    body: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let comment = comment_service
        .update_comment(&user, &path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment updated successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "data": CommentView::from(comment)
    })))
}

/// Delete a comment
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    user: AuthUser,
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    comment_service
        .delete_comment(&user, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "comment has been deleted",
        "httpStatusCode": 200,
        "service": service_name()
    })))
}

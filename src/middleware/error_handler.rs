use actix_web::dev::ServiceResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{Error, HttpRequest, HttpResponse, Result};
use serde_json::json;

use crate::utils::error::CustomError;
use crate::utils::helpers::service_name;

pub(crate) fn is_json_response<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false)
}

/// Rewraps framework-generated errors (plain text bodies) in the JSON envelope.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json_response(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.status();
    let error_message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| status_code.canonical_reason().unwrap_or("Unknown error").to_string());

    let new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": error_message,
        "httpStatusCode": status_code.as_u16(),
        "error": status_code.canonical_reason().unwrap_or("Unknown"),
        "service": service_name(),
    }));

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

/// Malformed or mistyped JSON bodies are client validation failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    CustomError::ValidationError(err.to_string()).into()
}

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, dev::Payload, dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures_util::future::{Ready, ready};
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::warn;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::database::RedisService;
use crate::utils::error::CustomError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    #[serde(default, rename = "isAdmin", alias = "is_admin")]
    pub is_admin: bool,
    pub exp: usize,
}

/// The authenticated caller, handed to every comment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: ObjectId,
    pub is_admin: bool,
}

impl AuthUser {
    pub fn from_claims(claims: &Claims) -> Result<Self, CustomError> {
        let id = ObjectId::parse_str(&claims.id)
            .map_err(|_| CustomError::UnauthorizedError("Invalid user id in token".to_string()))?;

        Ok(AuthUser {
            id,
            is_admin: claims.is_admin,
        })
    }
}

pub fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string())
}

/// Verify JWT token and, when Redis is configured, the backing session
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let token = credentials.token();
    let secret = jwt_secret();

    let token_data = match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => data,
        Err(_) => return Err((unauthorized("Invalid token"), req)),
    };

    let redis_service = match req.app_data::<web::Data<RedisService>>().cloned() {
        Some(service) => service,
        None => {
            req.extensions_mut().insert(token_data.claims);
            return Ok(req);
        }
    };

    let lookup = redis_service.validate_session(token).await;
    match session_verdict(lookup, &token_data.claims.id) {
        Ok(()) => {
            req.extensions_mut().insert(token_data.claims);
            Ok(req)
        }
        Err(message) => Err((unauthorized(message), req)),
    }
}

/// Decide whether a Redis session lookup backs the token's subject.
/// Redis errors fall back to trusting the signed token alone.
pub fn session_verdict(
    lookup: Result<Option<String>, String>,
    claims_id: &str,
) -> Result<(), &'static str> {
    match lookup {
        Ok(Some(stored_user_id)) if stored_user_id == claims_id => Ok(()),
        Ok(Some(_)) => Err("Session mismatch"),
        Ok(None) => Err("Session expired or invalid"),
        Err(e) => {
            warn!("session check skipped: {}", e);
            Ok(())
        }
    }
}

fn unauthorized(message: &str) -> Error {
    CustomError::UnauthorizedError(message.to_string()).into()
}

/// Get the caller from request extensions (use after auth middleware)
pub fn get_auth_user_from_request(req: &HttpRequest) -> Result<AuthUser, CustomError> {
    let extensions = req.extensions();
    let claims = extensions
        .get::<Claims>()
        .ok_or_else(|| CustomError::UnauthorizedError("Not authenticated".to_string()))?;

    AuthUser::from_claims(claims)
}

impl FromRequest for AuthUser {
    type Error = CustomError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(get_auth_user_from_request(req))
    }
}

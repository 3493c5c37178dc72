use crate::errors::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the opaque user id the external identity provider issued.
/// The core never sees credentials, only this stable identifier.
pub const USER_HEADER: &str = "x-user-id";

/// Authenticated user id, extracted per request.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match id {
            Some(id) => Ok(UserId(id.to_string())),
            None => Err(AppError::not_authenticated()),
        }
    }
}

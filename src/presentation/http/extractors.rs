// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::order::UserId,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::HttpError;

/// Optional authenticated customer, resolved through the identity port.
/// Requests without a usable bearer token proceed as guests.
#[derive(Debug, Clone)]
pub struct MaybeCustomer(pub Option<UserId>);

impl<S> FromRequestParts<S> for MaybeCustomer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let Some(token) = token else {
            return Ok(Self(None));
        };

        let user = app_state
            .services
            .identity_context()
            .resolve(token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

use crate::errors::{ErrorResponse, RepositoryError, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Repo(repo) => match repo {
                RepositoryError::NotFound => HttpError::NotFound("Resource not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => HttpError::Conflict(msg),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                other => HttpError::Internal(other.to_string()),
            },
            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".into())
            }
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join(", ")),
            ServiceError::TokenExpired => HttpError::Unauthorized("Token has expired".into()),
            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token".into()),
            ServiceError::Jwt(_) => HttpError::Unauthorized("Invalid token".into()),
            ServiceError::InsufficientStock { .. } => HttpError::BadRequest(error.to_string()),
            ServiceError::InvalidTransition(msg) => HttpError::UnprocessableEntity(msg),
            ServiceError::Email(msg) => HttpError::ServiceUnavailable(msg),
            other => HttpError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_404() {
        let err: HttpError = ServiceError::Repo(RepositoryError::NotFound).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let err: HttpError = ServiceError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn insufficient_stock_maps_to_400() {
        let err: HttpError = ServiceError::InsufficientStock {
            requested: 5,
            available: 2,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("requested 5"));
    }

    #[test]
    fn invalid_transition_maps_to_422() {
        let err: HttpError =
            ServiceError::InvalidTransition("Only approved reservations can be completed".into())
                .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn duplicate_key_maps_to_409() {
        let err: HttpError =
            ServiceError::Repo(RepositoryError::AlreadyExists("Email already registered".into()))
                .into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}

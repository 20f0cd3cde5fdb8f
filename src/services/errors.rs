//! Error taxonomy shared by all service operations and its mapping onto
//! HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

/// A single failed field reported back to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("database unreachable: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("record".to_string()),
            RepositoryError::Connection(message) => ServiceError::Connection(message),
            RepositoryError::Database(message)
            | RepositoryError::ConstraintViolation(message) => ServiceError::Database(message),
            RepositoryError::Unexpected(message) => ServiceError::Unexpected(message),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| FieldError {
                    message: err
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                    field: Some(field.to_string()),
                })
            })
            .collect();

        ServiceError::Validation(fields)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    errors: Vec<FieldError>,
}

impl ErrorBody {
    fn message(message: String) -> Self {
        Self {
            errors: vec![FieldError {
                message,
                field: None,
            }],
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(fields) => HttpResponse::BadRequest().json(ErrorBody {
                errors: fields.clone(),
            }),
            ServiceError::NotFound(_) => {
                HttpResponse::NotFound().json(ErrorBody::message(self.to_string()))
            }
            other => {
                // Detail stays in the log; the client only sees a generic body.
                log::error!("service failure: {other}");
                HttpResponse::InternalServerError()
                    .json(ErrorBody::message("Something went wrong".to_string()))
            }
        }
    }
}

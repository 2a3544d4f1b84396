//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind, FieldErrorDto},
    server::error::{
        config::ConfigError,
        validation::{field_names, FieldError},
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client-correctable variants carry enough
/// detail to fix the request; infrastructure variants are logged and answered with a
/// generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Connection failures result in 503 Service Unavailable so that clients may
    /// retry reads; every other database error results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// One or more request fields failed validation.
    ///
    /// Results in 422 Unprocessable Entity listing every failing field.
    #[error("Validation failed for: {}", field_names(.0))]
    ValidationFailed(Vec<FieldError>),

    /// A supplied member id does not resolve to an existing member.
    ///
    /// Results in 400 Bad Request naming the offending field.
    #[error("{field} {id} does not reference an existing member")]
    InvalidReference {
        /// Request field that carried the id
        field: String,
        /// The id that failed to resolve
        id: i32,
    },

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed(vec![FieldError::new(field, message)])
    }

    /// Maps a failed insert carrying a member reference.
    ///
    /// A foreign key violation means the member vanished after it was checked, which is
    /// reported as `InvalidReference`; every other database error passes through.
    pub fn from_reference_insert(err: DbErr, field: &str, id: i32) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::InvalidReference {
                field: field.to_string(),
                id,
            },
            _ => Self::DbErr(err),
        }
    }
}

/// Returns true for database errors caused by an unreachable or exhausted connection.
fn is_storage_unavailable(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

fn error_response(
    status: StatusCode,
    kind: ErrorKind,
    error: String,
    fields: Vec<FieldErrorDto>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            error,
            kind,
            fields,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidReference`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `ValidationFailed`
/// - 503 Service Unavailable - For database connection failures
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                error_response(StatusCode::NOT_FOUND, ErrorKind::NotFound, msg, Vec::new())
            }
            Self::ValidationFailed(errors) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::ValidationFailed,
                "Validation failed".to_string(),
                errors.into_iter().map(FieldError::into_dto).collect(),
            ),
            Self::InvalidReference { field, id } => error_response(
                StatusCode::BAD_REQUEST,
                ErrorKind::InvalidReference,
                format!("Member {} not found", id),
                vec![FieldErrorDto {
                    field,
                    message: format!("Member {} does not exist", id),
                }],
            ),
            Self::DbErr(err) if is_storage_unavailable(&err) => {
                tracing::error!("Storage unavailable: {}", err);
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorKind::StorageUnavailable,
                    "Storage temporarily unavailable".to_string(),
                    Vec::new(),
                )
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError("Internal server error").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Internal,
            "Internal server error".to_string(),
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
    use entity::prelude::*;
    use sea_orm::RuntimeErr;
    use test_utils::builder::TestBuilder;

    async fn body_of(response: Response) -> ErrorDto {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_failed_lists_every_field() {
        let err = AppError::ValidationFailed(vec![
            FieldError::new("name", "must not be blank"),
            FieldError::new("role", "must not be blank"),
        ]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_of(response).await;
        assert_eq!(body.kind, ErrorKind::ValidationFailed);
        let fields: Vec<_> = body.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "role"]);
    }

    #[tokio::test]
    async fn invalid_reference_is_bad_request() {
        let err = AppError::InvalidReference {
            field: "member_id".to_string(),
            id: 42,
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.kind, ErrorKind::InvalidReference);
        assert_eq!(body.fields[0].field, "member_id");
    }

    #[tokio::test]
    async fn not_found_keeps_message() {
        let response = AppError::NotFound("Member not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "Member not found");
        assert!(body.fields.is_empty());
    }

    #[tokio::test]
    async fn connection_failure_is_storage_unavailable() {
        let err = AppError::DbErr(DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_string(),
        )));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_of(response).await.kind, ErrorKind::StorageUnavailable);
    }

    #[tokio::test]
    async fn other_database_errors_hide_details() {
        let err = AppError::DbErr(DbErr::Custom("secret table layout".to_string()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.kind, ErrorKind::Internal);
        assert_eq!(body.error, "Internal server error");
    }

    #[tokio::test]
    async fn foreign_key_violation_becomes_invalid_reference() {
        let test = TestBuilder::new()
            .with_table(Member)
            .with_table(Comment)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        // Member 999 was never created, as if deleted right after the existence check.
        let err = CommentRepository::new(db)
            .create(CreateCommentParams {
                member_id: 999,
                author_name: "Rafa".to_string(),
                text: "Sumiu?".to_string(),
            })
            .await
            .expect_err("insert should violate the foreign key");

        match AppError::from_reference_insert(err, "member_id", 999) {
            AppError::InvalidReference { field, id } => {
                assert_eq!(field, "member_id");
                assert_eq!(id, 999);
            }
            other => panic!("expected InvalidReference, got {:?}", other),
        }
    }

    #[test]
    fn other_insert_errors_pass_through() {
        let err = DbErr::Custom("disk full".to_string());

        assert!(matches!(
            AppError::from_reference_insert(err, "member_id", 1),
            AppError::DbErr(DbErr::Custom(_))
        ));
    }
}

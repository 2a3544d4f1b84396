use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::state::AppState,
};

mod quote;
mod root;

fn state(db: &DatabaseConnection) -> State<AppState> {
    State(AppState::new(db.clone()))
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and error kind of an error response.
async fn assert_error(response: Response, status: StatusCode, kind: ErrorKind) -> ErrorDto {
    assert_eq!(response.status(), status);
    let body: ErrorDto = body_json(response).await;
    assert_eq!(body.kind, kind);
    body
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        quote::{CreateQuoteDto, QuoteDto},
    },
    server::{
        error::AppError, model::quote::CreateQuoteParams, service::quote::QuoteService,
        state::AppState, util::parse::parse_path_id,
    },
};

/// Tag for grouping quote endpoints in OpenAPI documentation
pub static QUOTE_TAG: &str = "quote";

/// List every quote with its author's name.
///
/// Quotes without a member are attributed to "Anônimo".
///
/// # Returns
/// - `200 OK` - Quotes in creation order
#[utoipa::path(
    get,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    responses(
        (status = 200, description = "Quotes in creation order", body = Vec<QuoteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quotes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quotes = QuoteService::new(&state.db).get_all_with_authors().await?;

    Ok(Json(
        quotes
            .into_iter()
            .map(|q| q.into_dto())
            .collect::<Vec<QuoteDto>>(),
    ))
}

/// Add a quote, optionally attributed to a member.
///
/// # Returns
/// - `201 Created` - The created quote
/// - `400 Bad Request` - The member does not exist
/// - `422 Unprocessable Entity` - Missing or malformed fields
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    request_body = CreateQuoteDto,
    responses(
        (status = 201, description = "Successfully created quote", body = QuoteDto),
        (status = 400, description = "Member does not exist", body = ErrorDto),
        (status = 422, description = "Invalid quote data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateQuoteParams::from_dto(payload)?;
    let quote = QuoteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(quote.into_dto())))
}

/// Delete a quote.
///
/// # Returns
/// - `204 No Content` - Quote deleted
/// - `404 Not Found` - No quote with that id
#[utoipa::path(
    delete,
    path = "/api/quotes/{quote_id}",
    tag = QUOTE_TAG,
    params(
        ("quote_id" = i32, Path, description = "Quote ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted quote"),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(&quote_id)
        .ok_or_else(|| AppError::NotFound(format!("Quote {} not found", quote_id)))?;
    QuoteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

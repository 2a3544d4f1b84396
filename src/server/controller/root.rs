use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// Name reported by the root endpoint.
pub const API_NAME: &str = "Gangue da Maverick API";

/// Identify the API.
///
/// # Returns
/// - `200 OK` - The API name
#[utoipa::path(
    get,
    path = "/api/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API identification", body = MessageDto)
    ),
)]
pub async fn get_root() -> impl IntoResponse {
    Json(MessageDto {
        message: API_NAME.to_string(),
    })
}

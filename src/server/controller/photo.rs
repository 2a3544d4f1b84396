use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        photo::{CreatePhotoDto, PhotoDto},
    },
    server::{
        error::AppError, model::photo::CreatePhotoParams, service::photo::PhotoService,
        state::AppState, util::parse::parse_path_id,
    },
};

/// Tag for grouping photo endpoints in OpenAPI documentation
pub static PHOTO_TAG: &str = "photo";

/// List every photo.
///
/// # Returns
/// - `200 OK` - Photos in creation order
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = PHOTO_TAG,
    responses(
        (status = 200, description = "Photos in creation order", body = Vec<PhotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_photos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let photos = PhotoService::new(&state.db).get_all().await?;

    Ok(Json(
        photos
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<PhotoDto>>(),
    ))
}

/// Add a photo to the gallery.
///
/// The URL is stored as given. Every id in `member_ids` must belong to an
/// existing member.
///
/// # Returns
/// - `201 Created` - The created photo
/// - `400 Bad Request` - A tagged member does not exist
/// - `422 Unprocessable Entity` - Missing or malformed fields
#[utoipa::path(
    post,
    path = "/api/photos",
    tag = PHOTO_TAG,
    request_body = CreatePhotoDto,
    responses(
        (status = 201, description = "Successfully created photo", body = PhotoDto),
        (status = 400, description = "Tagged member does not exist", body = ErrorDto),
        (status = 422, description = "Invalid photo data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_photo(
    State(state): State<AppState>,
    Json(payload): Json<CreatePhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePhotoParams::from_dto(payload)?;
    let photo = PhotoService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(photo.into_dto())))
}

/// Delete a photo.
///
/// # Returns
/// - `204 No Content` - Photo deleted
/// - `404 Not Found` - No photo with that id
#[utoipa::path(
    delete,
    path = "/api/photos/{photo_id}",
    tag = PHOTO_TAG,
    params(
        ("photo_id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted photo"),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(&photo_id)
        .ok_or_else(|| AppError::NotFound(format!("Photo {} not found", photo_id)))?;
    PhotoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

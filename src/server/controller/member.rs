use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    },
    server::{
        error::AppError,
        model::member::{CreateMemberParams, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List every member.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Members in creation order
/// - `503 Service Unavailable` - Storage could not be reached
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Members in creation order", body = Vec<MemberDto>),
        (status = 503, description = "Storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).get_all().await?;

    Ok(Json(
        members
            .into_iter()
            .map(|m| m.into_dto())
            .collect::<Vec<MemberDto>>(),
    ))
}

/// Create a member.
///
/// `characteristics` may be sent as a list of strings or as a single
/// comma-separated string. An empty `photo_url` means no photo.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Member data
///
/// # Returns
/// - `201 Created` - The created member
/// - `422 Unprocessable Entity` - Missing or malformed fields
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully created member", body = MemberDto),
        (status = 422, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMemberParams::from_dto(payload)?;
    let member = MemberService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get a member by ID.
///
/// # Returns
/// - `200 OK` - The member
/// - `404 Not Found` - No member with that id
#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "The member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(&member_id).ok_or_else(|| member_not_found(&member_id))?;
    let member = MemberService::new(&state.db).get_by_id(id).await?;

    Ok(Json(member.into_dto()))
}

/// Update a member.
///
/// Only the fields present in the payload change. An empty `photo_url` removes
/// the photo; an empty payload is rejected.
///
/// # Returns
/// - `200 OK` - The member after the update
/// - `404 Not Found` - No member with that id
/// - `422 Unprocessable Entity` - Blank or malformed fields, or nothing to update
#[utoipa::path(
    put,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Successfully updated member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 422, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(&member_id).ok_or_else(|| member_not_found(&member_id))?;
    let params = UpdateMemberParams::from_dto(id, payload)?;
    let member = MemberService::new(&state.db).update(params).await?;

    Ok(Json(member.into_dto()))
}

/// Delete a member.
///
/// Also deletes the member's comments, makes their quotes anonymous and removes
/// them from photo tags.
///
/// # Returns
/// - `204 No Content` - Member deleted
/// - `404 Not Found` - No member with that id
#[utoipa::path(
    delete,
    path = "/api/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted member"),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(&member_id).ok_or_else(|| member_not_found(&member_id))?;
    MemberService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn member_not_found(member_id: &str) -> AppError {
    AppError::NotFound(format!("Member {} not found", member_id))
}

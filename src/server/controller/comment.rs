use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParams, service::comment::CommentService,
        state::AppState, util::parse::parse_path_id,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments on a member, oldest first.
///
/// Unknown members simply have no comments.
///
/// # Returns
/// - `200 OK` - Comments in creation order
#[utoipa::path(
    get,
    path = "/api/comments/{member_id}",
    tag = COMMENT_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Comments on the member", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comments = match parse_path_id(&member_id) {
        Some(member_id) => CommentService::new(&state.db).get_by_member(member_id).await?,
        None => Vec::new(),
    };

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<CommentDto>>(),
    ))
}

/// Leave a comment on a member.
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - The member does not exist
/// - `422 Unprocessable Entity` - Missing or malformed fields
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Member does not exist", body = ErrorDto),
        (status = 422, description = "Invalid comment data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCommentParams::from_dto(payload)?;
    let comment = CommentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

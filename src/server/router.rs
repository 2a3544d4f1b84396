//! Route table and API documentation.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{comment, member, photo, quote, root},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gangue da Maverick API",
        description = "Members, comments, quotes and photos of the Gangue da Maverick"
    ),
    tags(
        (name = "root", description = "Service identification"),
        (name = "member", description = "Group members"),
        (name = "comment", description = "Comments left on member profiles"),
        (name = "quote", description = "Memorable quotes"),
        (name = "photo", description = "Photo gallery")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::get_root))
        .routes(routes!(member::get_members, member::create_member))
        .routes(routes!(
            member::get_member,
            member::update_member,
            member::delete_member
        ))
        .routes(routes!(comment::create_comment))
        .routes(routes!(comment::get_comments))
        .routes(routes!(quote::get_quotes, quote::create_quote))
        .routes(routes!(quote::delete_quote))
        .routes(routes!(photo::get_photos, photo::create_photo))
        .routes(routes!(photo::delete_photo))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .with_state(state)
}

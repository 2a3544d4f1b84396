use super::*;
use crate::{model::api::MessageDto, server::controller::root::get_root};

/// Tests the root endpoint.
///
/// Expected: 200 with the API name
#[tokio::test]
async fn returns_api_name() {
    let response = get_root().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body: MessageDto = body_json(response).await;
    assert_eq!(body.message, "Gangue da Maverick API");
}

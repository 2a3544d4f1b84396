use super::*;
use crate::{
    model::{
        api::MemberIdDto,
        quote::{CreateQuoteDto, QuoteDto},
    },
    server::controller::quote::{create_quote, delete_quote, get_quotes},
};

/// Tests that quotes are listed with resolved authors.
///
/// Expected: 200 with the member's name and "Anônimo"
#[tokio::test]
async fn lists_quotes_with_authors() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("Pedro")
        .build()
        .await
        .unwrap();

    let attributed = CreateQuoteDto {
        text: Some("Confia".to_string()),
        context: Some("No churrasco".to_string()),
        member_id: Some(MemberIdDto::Id(member.id)),
    };
    let response = create_quote(state(db), Json(attributed))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let anonymous = CreateQuoteDto {
        text: Some("Bora".to_string()),
        member_id: Some(MemberIdDto::Text(String::new())),
        ..Default::default()
    };
    let response = create_quote(state(db), Json(anonymous))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_quotes(state(db)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let quotes: Vec<QuoteDto> = body_json(response).await;

    let authors: Vec<_> = quotes.iter().map(|q| q.author.as_str()).collect();
    assert_eq!(authors, vec!["Pedro", "Anônimo"]);
    assert_eq!(quotes[1].member_id, None);
}

/// Tests creating a quote without text.
///
/// Expected: 422 on field text
#[tokio::test]
async fn rejects_quote_without_text() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = create_quote(state(db), Json(CreateQuoteDto::default()))
        .await
        .into_response();
    let body = assert_error(
        response,
        StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::ValidationFailed,
    )
    .await;

    assert_eq!(body.fields[0].field, "text");
}

/// Tests deleting a quote twice.
///
/// Expected: 204, then 404
#[tokio::test]
async fn deletes_quote_once() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quote = factory::create_quote(db).await.unwrap();

    let response = delete_quote(state(db), Path(quote.id.to_string()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_quote(state(db), Path(quote.id.to_string()))
        .await
        .into_response();
    assert_error(response, StatusCode::NOT_FOUND, ErrorKind::NotFound).await;
}

/// Tests deleting with a non-numeric id.
///
/// Expected: 404
#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = delete_quote(state(db), Path("abc".to_string()))
        .await
        .into_response();
    assert_error(response, StatusCode::NOT_FOUND, ErrorKind::NotFound).await;
}

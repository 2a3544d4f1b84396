use super::*;

/// Tests that updating only the nickname leaves every other field untouched.
///
/// Expected: Ok(Some) with only nickname changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let before = repo.create(create_params("Pedro")).await?;

    let after = repo
        .update(UpdateMemberParams {
            id: before.id,
            nickname: Some("Pedrinho".to_string()),
            ..Default::default()
        })
        .await?
        .expect("member should exist");

    assert_eq!(after.nickname, "Pedrinho");
    assert_eq!(
        after,
        crate::server::model::member::Member {
            nickname: "Pedrinho".to_string(),
            ..before
        }
    );

    Ok(())
}

/// Tests clearing the photo URL and replacing characteristics.
///
/// Expected: Ok(Some) with photo_url None and the new characteristics
#[tokio::test]
async fn clears_photo_and_replaces_characteristics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .photo_url(Some("https://example.com/p.jpg"))
        .characteristics(&["Antigo"])
        .build()
        .await?;

    let updated = MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: created.id,
            characteristics: Some(vec!["Novo".to_string()]),
            photo_url: Some(None),
            ..Default::default()
        })
        .await?
        .expect("member should exist");

    assert_eq!(updated.photo_url, None);
    assert_eq!(updated.characteristics, vec!["Novo"]);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(UpdateMemberParams {
            id: 42,
            name: Some("Ninguém".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

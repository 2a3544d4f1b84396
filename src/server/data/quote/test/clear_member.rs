use super::*;

/// Tests detaching a member from their quotes.
///
/// Expected: Ok with the member's quotes anonymous; other quotes untouched
#[tokio::test]
async fn clears_only_that_members_quotes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Quote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    factory::quote::QuoteFactory::new(db)
        .member_id(Some(member.id))
        .build()
        .await?;
    factory::quote::QuoteFactory::new(db)
        .member_id(Some(other.id))
        .build()
        .await?;

    let repo = QuoteRepository::new(db);
    assert_eq!(repo.clear_member(member.id).await?, 1);

    let member_ids: Vec<_> = repo.get_all().await?.iter().map(|q| q.member_id).collect();
    assert_eq!(member_ids, vec![None, Some(other.id)]);

    Ok(())
}

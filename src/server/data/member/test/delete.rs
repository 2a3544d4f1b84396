use super::*;

/// Tests deleting an existing member.
///
/// Expected: Ok(true) and the member is gone
#[tokio::test]
async fn deletes_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    assert!(repo.delete(member.id).await?);
    assert!(!repo.exists(member.id).await?);

    Ok(())
}

/// Tests deleting the same member twice.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn second_delete_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    assert!(repo.delete(member.id).await?);
    assert!(!repo.delete(member.id).await?);

    Ok(())
}

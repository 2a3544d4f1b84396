use super::*;

/// Tests creating a member.
///
/// Verifies that the repository stores every field and decodes the
/// characteristics back in their original order.
///
/// Expected: Ok with member matching the params
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(create_params("Pedro Henrique")).await?;

    assert!(member.id > 0);
    assert_eq!(member.name, "Pedro Henrique");
    assert_eq!(member.characteristics, vec!["Dormiu na escola", "Fã da DC"]);
    assert_eq!(member.photo_url, None);

    Ok(())
}

/// Tests that identical payloads create distinct members.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn creates_distinct_members_for_identical_params() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let first = repo.create(create_params("Pedro")).await?;
    let second = repo.create(create_params("Pedro")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that ids are not reused after a deletion.
///
/// Expected: Ok with the new id greater than the deleted one
#[tokio::test]
async fn does_not_reuse_deleted_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let first = repo.create(create_params("Pedro")).await?;
    assert!(repo.delete(first.id).await?);

    let second = repo.create(create_params("João")).await?;
    assert!(second.id > first.id);

    Ok(())
}

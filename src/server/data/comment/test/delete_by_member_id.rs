use super::*;

/// Tests removing every comment of one member.
///
/// Expected: Ok with the deleted count; other members keep their comments
#[tokio::test]
async fn deletes_only_that_members_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _) = factory::create_member_with_comments(db, 2).await?;
    let (other, _) = factory::create_member_with_comments(db, 1).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.delete_by_member_id(member.id).await?, 2);

    assert!(repo.get_by_member_id(member.id).await?.is_empty());
    assert_eq!(repo.get_by_member_id(other.id).await?.len(), 1);

    Ok(())
}

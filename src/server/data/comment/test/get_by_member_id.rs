use super::*;

/// Tests that only the requested member's comments are returned, oldest first.
///
/// Expected: Ok with the member's comments in creation order
#[tokio::test]
async fn returns_member_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, created) = factory::create_member_with_comments(db, 3).await?;
    let (_other, _) = factory::create_member_with_comments(db, 2).await?;

    let comments = CommentRepository::new(db)
        .get_by_member_id(member.id)
        .await?;

    let ids: Vec<_> = comments.iter().map(|c| c.id).collect();
    let expected: Vec<_> = created.iter().map(|c| c.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing comments of a member that has none.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let comments = CommentRepository::new(db).get_by_member_id(999).await?;
    assert!(comments.is_empty());

    Ok(())
}

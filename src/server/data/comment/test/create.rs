use super::*;
use sea_orm::SqlErr;

/// Tests creating a comment on an existing member.
///
/// Expected: Ok with comment linked to the member
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParams {
            member_id: member.id,
            author_name: "Rafa".to_string(),
            text: "Lenda".to_string(),
        })
        .await?;

    assert_eq!(comment.member_id, member.id);
    assert_eq!(comment.author_name, "Rafa");
    assert_eq!(comment.text, "Lenda");

    Ok(())
}

/// Tests that the foreign key rejects a comment on an unknown member.
///
/// Expected: Err with a foreign key constraint violation
#[tokio::test]
async fn rejects_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Member)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentRepository::new(db)
        .create(CreateCommentParams {
            member_id: 999,
            author_name: "Rafa".to_string(),
            text: "Quem?".to_string(),
        })
        .await;

    let err = result.expect_err("insert should violate the foreign key");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

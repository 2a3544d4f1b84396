use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, member::MemberRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on an existing member
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::InvalidReference)` - The member does not exist
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let member_id = params.member_id;

        if !MemberRepository::new(self.db).exists(member_id).await? {
            return Err(AppError::InvalidReference {
                field: "member_id".to_string(),
                id: member_id,
            });
        }

        CommentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_reference_insert(e, "member_id", member_id))
    }

    /// Gets the comments on a member, oldest first. Unknown members have no comments.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .get_by_member_id(member_id)
            .await?;

        Ok(comments)
    }
}

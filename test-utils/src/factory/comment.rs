//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on a member.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    author_name: String,
    text: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory for `member_id`.
    ///
    /// Defaults:
    /// - author_name: `"Author {id}"`
    /// - text: `"Comment {id}"`
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            author_name: format!("Author {}", id),
            text: format!("Comment {}", id),
        }
    }

    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = author_name.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            author_name: ActiveValue::Set(self.author_name),
            text: ActiveValue::Set(self.text),
            timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values on `member_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, member_id).build().await
}

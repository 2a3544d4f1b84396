//! Comment domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::{error::AppError, util::validate::Validator},
};

/// A remark left on a member's profile. Comments are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    /// Member the comment was written about.
    pub member_id: i32,
    pub author_name: String,
    pub text: String,
    /// Server-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            author_name: entity.author_name,
            text: entity.text,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            member_id: self.member_id,
            author_name: self.author_name,
            text: self.text,
            timestamp: self.timestamp,
        }
    }
}

/// Normalized parameters for creating a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    pub member_id: i32,
    pub author_name: String,
    pub text: String,
}

impl CreateCommentParams {
    /// Validates a create request. Whether the member exists is checked by the service.
    pub fn from_dto(dto: CreateCommentDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let params = Self {
            member_id: v.required_member_id("member_id", dto.member_id),
            author_name: v.required("author_name", dto.author_name),
            text: v.required("text", dto.text),
        };

        v.finish()?;
        Ok(params)
    }
}

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        comment::CommentRepository, member::MemberRepository, photo::PhotoRepository,
        quote::QuoteRepository,
    },
    error::AppError,
    model::member::{CreateMemberParams, Member, UpdateMemberParams},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new member
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let member = MemberRepository::new(self.db).create(params).await?;

        Ok(member)
    }

    /// Gets all members in creation order
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;

        Ok(members)
    }

    /// Gets a member by ID
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::NotFound)` - No member with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| member_not_found(id))
    }

    /// Applies a partial update to a member
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Member, AppError> {
        let id = params.id;

        MemberRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| member_not_found(id))
    }

    /// Deletes a member together with everything that refers to them.
    ///
    /// Inside a single transaction the member's comments are deleted, their quotes
    /// become anonymous and their id is removed from photo tags before the member row
    /// itself is deleted. Nothing is changed when the member does not exist.
    ///
    /// # Returns
    /// - `Ok(())` - Member and dependent data removed
    /// - `Err(AppError::NotFound)` - No member with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !MemberRepository::new(&txn).exists(id).await? {
            return Err(member_not_found(id));
        }

        let comments = CommentRepository::new(&txn).delete_by_member_id(id).await?;
        let quotes = QuoteRepository::new(&txn).clear_member(id).await?;
        let photos = PhotoRepository::new(&txn).remove_member_tag(id).await?;
        MemberRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted member {} ({} comments removed, {} quotes anonymized, {} photos untagged)",
            id,
            comments,
            quotes,
            photos
        );

        Ok(())
    }
}

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member {} not found", id))
}

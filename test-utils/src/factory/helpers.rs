//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member together with `count` comments about them.
///
/// Comments are inserted in order, so their ids ascend with the returned vector.
///
/// # Returns
/// - `Ok((member, comments))` - Created member and its comments
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_comments(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::member::Model, Vec<entity::comment::Model>), DbErr> {
    let member = crate::factory::member::create_member(db).await?;

    let mut comments = Vec::with_capacity(count);
    for _ in 0..count {
        comments.push(crate::factory::comment::create_comment(db, member.id).await?);
    }

    Ok((member, comments))
}

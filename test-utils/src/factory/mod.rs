//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let member = factory::create_member(&db).await?;
//!     let comment = factory::create_comment(&db, member.id).await?;
//!
//!     let quote = factory::quote::QuoteFactory::new(&db)
//!         .member_id(Some(member.id))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod comment;
pub mod helpers;
pub mod member;
pub mod photo;
pub mod quote;

pub use comment::create_comment;
pub use helpers::create_member_with_comments;
pub use member::create_member;
pub use photo::create_photo;
pub use quote::create_quote;

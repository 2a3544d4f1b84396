//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so it runs the same way on the
//! shared `DatabaseConnection` or on a `DatabaseTransaction` opened by a service.

pub mod comment;
pub mod member;
pub mod photo;
pub mod quote;

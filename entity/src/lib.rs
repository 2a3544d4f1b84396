//! SeaORM entity models for the Maverick database.
//!
//! One module per table. The `prelude` re-exports each `Entity` under the
//! table's type name so callers can write `Member::find()`.

pub mod prelude;

pub mod comment;
pub mod member;
pub mod photo;
pub mod quote;

//! Small pure helpers shared by the request models.

pub mod parse;
pub mod validate;

//! Request and response DTOs exchanged with the frontend.
//!
//! These types define the JSON wire format of the `/api` endpoints. Request DTOs
//! are deliberately permissive (every field optional) so that validation can
//! report all failing fields at once instead of failing on the first missing key.

pub mod api;
pub mod comment;
pub mod member;
pub mod photo;
pub mod quote;

//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter types, call the matching service and
//! convert the resulting domain models back into DTOs. Every handler is annotated with
//! `utoipa::path` so the router can build the OpenAPI document from it.

pub mod comment;
pub mod member;
pub mod photo;
pub mod quote;
pub mod root;

#[cfg(test)]
mod test;

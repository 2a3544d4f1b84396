//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through validation, so every value that
//! reaches a service is already normalized.

pub mod comment;
pub mod json_list;
pub mod member;
pub mod photo;
pub mod quote;

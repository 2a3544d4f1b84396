//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Reference checks**: Resolving member ids before anything points at them
//! - **Orchestration**: Coordinating repositories, such as the member deletion cascade
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod comment;
pub mod member;
pub mod photo;
pub mod quote;

#[cfg(test)]
mod test;

//! Domain layer - framework-free types
//!
//! Error taxonomy and policies shared by the service layer.
//! No SeaORM or Axum types leak out of here except the `DbErr` conversion.

pub mod errors;
pub mod policy;

pub use errors::DomainError;
pub use policy::EmptyResultPolicy;

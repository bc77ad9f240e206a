//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The customer entity, its write payload and validation rules live here and
//! are shared by the service and gateway crates.

pub mod constants;
pub mod customer;
pub mod error;
pub mod password;

pub use constants::*;
pub use customer::{Customer, CustomerPayload};
pub use error::{DomainError, DomainResult};
pub use password::Password;

//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The client-facing error taxonomy and its HTTP rendering
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};

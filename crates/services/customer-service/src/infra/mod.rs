//! Infrastructure layer - database connection and schema bootstrap.

mod db;

pub use db::Database;

//! Request extractors that reject with [`common::AppError`].

mod customer_id;
mod json_body;

pub use customer_id::CustomerId;
pub use json_body::JsonBody;

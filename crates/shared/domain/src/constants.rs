//! Domain-level constants.
//!
//! Fixed client-facing messages; underlying causes never reach a caller.

/// Returned when a customer payload fails structural validation
pub const INVALID_CUSTOMER_MESSAGE: &str = "invalid customer";

/// Returned when another customer already owns the email
pub const DUPLICATE_EMAIL_MESSAGE: &str = "a customer with this email already exists";

/// Returned after a successful delete
pub const CUSTOMER_DELETED_MESSAGE: &str = "customer deleted successfully";

/// Returned for any storage failure; the underlying cause is only logged
pub const PERSISTENCE_FAILURE_MESSAGE: &str = "the request could not be completed";

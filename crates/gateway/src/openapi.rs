//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::customer_handler::MessageResponse;
use crate::handlers::health_handler::{HealthResponse, ServiceStatus};
use domain::{Customer, CustomerPayload};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::create_customer,
        crate::handlers::customer_handler::update_customer,
        crate::handlers::customer_handler::delete_customer,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            Customer,
            CustomerPayload,
            MessageResponse,
            HealthResponse,
            ServiceStatus,
        )
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

//! Customer handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::{Customer, CustomerPayload, CUSTOMER_DELETED_MESSAGE};

use crate::extractors::{CustomerId, JsonBody};
use crate::state::AppState;

/// Plain confirmation body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "customer deleted successfully")]
    pub message: String,
}

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Every customer, passwords cleared", body = Vec<Customer>),
        (status = 400, description = "Unexpected error")
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customer_service.list_customers().await?;
    Ok(Json(customers))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer, password cleared", body = Customer),
        (status = 400, description = "Malformed id or unexpected error"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> AppResult<Json<Customer>> {
    let customer = state.customer_service.get_customer(id).await?;
    Ok(Json(customer))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    request_body = CustomerPayload,
    responses(
        (status = 201, description = "Customer created", body = Customer,
            headers(("Location" = String, description = "Path of the new customer"))),
        (status = 400, description = "Invalid customer, duplicate email or unexpected error")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CustomerPayload>,
) -> AppResult<impl IntoResponse> {
    let customer = state.customer_service.create_customer(payload).await?;
    let location = format!("/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer),
    ))
}

/// Replace a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID; any id in the body is ignored")
    ),
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid customer, duplicate email or unexpected error"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
    JsonBody(payload): JsonBody<CustomerPayload>,
) -> AppResult<Json<Customer>> {
    let customer = state.customer_service.update_customer(id, payload).await?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 400, description = "Malformed id or unexpected error"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> AppResult<Json<MessageResponse>> {
    state.customer_service.delete_customer(id).await?;

    Ok(Json(MessageResponse {
        message: CUSTOMER_DELETED_MESSAGE.to_string(),
    }))
}

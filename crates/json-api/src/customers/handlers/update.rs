//! Update Customer Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use turtleman::customers::{
    CustomersServiceError, records::CustomerId, validation::ValidationErrors,
};

use crate::{
    customers::{
        errors::{ApiError, CUSTOMER_ID_DOES_NOT_EXIST, UPDATE_FAILED},
        responses::{CustomerApiResponse, CustomerRequest},
    },
    extensions::*,
};

/// Update Customer Handler
///
/// Replaces the names and email of an existing customer.
#[endpoint(
    tags("customers"),
    summary = "Update Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer with the ID does not exist"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid properties"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "customers.update",
    skip(id, json, depot),
    fields(customer_id = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerApiResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let id = CustomerId::new(id.into_inner());

    tracing::Span::current().record("customer_id", tracing::field::display(id));

    let existing = state
        .app
        .customers
        .get_by_id(id)
        .await
        .map_err(|error| ApiError::from_service(error, UPDATE_FAILED))?;

    if existing.is_none() {
        return Err(ApiError::not_found(CUSTOMER_ID_DOES_NOT_EXIST));
    }

    let customer = state
        .app
        .customers
        .upsert(json.into_inner().into_draft(Some(id)))
        .await
        .map_err(|error| match error {
            CustomersServiceError::Validation(errors) if only_id_rejected(&errors) => {
                ApiError::not_found(CUSTOMER_ID_DOES_NOT_EXIST)
            }
            error => ApiError::from_service(error, UPDATE_FAILED),
        })?;

    tracing::info!(customer_id = %id, "updated customer");

    Ok(Json(CustomerApiResponse::customer(customer)))
}

/// The customer was removed after the existence check.
fn only_id_rejected(errors: &ValidationErrors) -> bool {
    !errors.is_empty() && errors.fields().iter().all(|error| error.field == "id")
}

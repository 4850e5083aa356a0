//! Create Customer Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    customers::{
        errors::{ApiError, CREATE_FAILED},
        responses::{CustomerApiResponse, CustomerRequest},
    },
    extensions::*,
};

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid properties"),
        (status_code = StatusCode::CONFLICT, description = "Email already in use"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer could not be added"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerApiResponse>, ApiError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .upsert(json.into_inner().into_draft(None))
        .await
        .map_err(|error| ApiError::from_service(error, CREATE_FAILED))?;

    res.add_header(LOCATION, format!("/api/customers/{}", customer.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(customer_id = %customer.id, "created customer");

    Ok(Json(CustomerApiResponse::customer(customer)))
}

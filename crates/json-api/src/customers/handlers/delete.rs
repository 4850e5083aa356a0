//! Delete Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use turtleman::customers::records::CustomerId;

use crate::{
    customers::{
        errors::{ApiError, DELETE_FAILED, DELETED},
        responses::CustomerApiResponse,
    },
    extensions::*,
};

/// Delete Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer deleted successfully"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer deletion failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CustomerApiResponse>, ApiError> {
    let state = depot.state_or_500()?;
    let id = CustomerId::new(id.into_inner());

    let deleted = state
        .app
        .customers
        .delete(id)
        .await
        .map_err(|error| ApiError::from_service(error, DELETE_FAILED))?;

    if !deleted {
        return Err(ApiError::not_found(DELETE_FAILED));
    }

    tracing::info!(customer_id = %id, "deleted customer");

    Ok(Json(CustomerApiResponse::message(DELETED)))
}

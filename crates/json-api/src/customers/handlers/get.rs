//! Get Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use turtleman::customers::records::CustomerId;

use crate::{
    customers::{
        errors::{ApiError, CUSTOMER_NOT_FOUND},
        responses::CustomerApiResponse,
    },
    extensions::*,
};

/// Get Customer Handler
///
/// Returns a customer.
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer found"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CustomerApiResponse>, ApiError> {
    let state = depot.state_or_500()?;

    state
        .app
        .customers
        .get_by_id(CustomerId::new(id.into_inner()))
        .await
        .map_err(|error| ApiError::from_service(error, CUSTOMER_NOT_FOUND))?
        .map(|customer| Json(CustomerApiResponse::customer(customer)))
        .ok_or_else(|| ApiError::not_found(CUSTOMER_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use turtleman::customers::MockCustomersService;

    use crate::{
        customers::errors::INVALID_INPUT,
        test_helpers::{customers_service, make_customer},
    };

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        customers_service(customers, Router::with_path("api/customers/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_customer_success() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_get_by_id()
            .once()
            .with(eq(CustomerId::new(3)))
            .return_once(|_| Ok(Some(make_customer(3))));

        customers.expect_upsert().never();
        customers.expect_delete().never();

        let mut res = TestClient::get("http://example.com/api/customers/3")
            .send(&make_service(customers))
            .await;

        let body: CustomerApiResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.customer, Some(make_customer(3).into()));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_customer_missing_returns_404() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_get_by_id()
            .once()
            .return_once(|_| Ok(None));

        let mut res = TestClient::get("http://example.com/api/customers/404")
            .send(&make_service(customers))
            .await;

        let body: CustomerApiResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some(CUSTOMER_NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_customer_non_numeric_id_returns_400() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_get_by_id().never();

        let mut res = TestClient::get("http://example.com/api/customers/turtle")
            .send(&make_service(customers))
            .await;

        let body: CustomerApiResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some(INVALID_INPUT));

        Ok(())
    }
}

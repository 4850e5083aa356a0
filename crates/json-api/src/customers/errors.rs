//! Customer Errors

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use tracing::{error, warn};

use turtleman::customers::CustomersServiceError;

use crate::customers::responses::CustomerApiResponse;

pub(crate) const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub(crate) const CUSTOMER_ID_DOES_NOT_EXIST: &str = "Customer with the ID does not exist";
pub(crate) const CREATE_FAILED: &str = "failed to add a new customer";
pub(crate) const UPDATE_FAILED: &str = "Customer modification failed";
pub(crate) const DELETED: &str = "Customer deleted successfully";
pub(crate) const DELETE_FAILED: &str = "Customer deletion failed";
pub(crate) const EMAIL_IN_USE: &str = "Failed due to email already being in use";
pub(crate) const NULL_VALUES: &str = "Failed due to null values";
pub(crate) const VALIDATION_FAILED: &str =
    "Failed due to property validations, check for missing or badly formatted properties";
pub(crate) const UNKNOWN_ERROR: &str = "Failed due to an unknown error";
pub(crate) const INVALID_INPUT: &str =
    "Failed due to invalid input, check for missing or badly formatted properties";

const CUSTOMERS_PATH: &str = "/api/customers";

/// A failed customer request, rendered as an unsuccessful envelope.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Translate a service failure. `operation_failed` answers for records that could not be
    /// found during or after the write.
    pub(crate) fn from_service(error: CustomersServiceError, operation_failed: &str) -> Self {
        match error {
            CustomersServiceError::Validation(errors) => Self::new(
                StatusCode::BAD_REQUEST,
                format!("{VALIDATION_FAILED}: {errors}"),
            ),
            CustomersServiceError::DuplicateEmail => Self::new(StatusCode::CONFLICT, EMAIL_IN_USE),
            CustomersServiceError::RequiredField => Self::new(StatusCode::BAD_REQUEST, NULL_VALUES),
            CustomersServiceError::NotFound => Self::not_found(operation_failed),
            CustomersServiceError::MissingAfterWrite(id) => {
                warn!(customer_id = %id, "customer missing after write");

                Self::not_found(operation_failed)
            }
            CustomersServiceError::Storage(source) => {
                error!(error = ?source, "customer store failure");

                Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_ERROR)
            }
        }
    }
}

impl From<StatusError> for ApiError {
    fn from(error: StatusError) -> Self {
        let message = if error.code.is_server_error() {
            UNKNOWN_ERROR.to_owned()
        } else {
            error.brief
        };

        Self::new(error.code, message)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(CustomerApiResponse::failure(self.message)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, _operation: &mut Operation) {
        CustomerApiResponse::to_schema(components);
    }
}

/// Service catcher that answers customer routes with the failure envelope instead of the
/// default error page.
pub(crate) fn envelope_catcher() -> Catcher {
    Catcher::default().hoop(render_envelope)
}

/// Renders bodiless or framework-generated errors on customer routes, such as unparsable JSON,
/// wrongly typed fields and non-numeric ids.
#[handler]
async fn render_envelope(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    if !req.uri().path().starts_with(CUSTOMERS_PATH)
        || !(res.body.is_none() || res.body.is_error())
    {
        return;
    }

    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if status == StatusCode::BAD_REQUEST {
        INVALID_INPUT
    } else if status.is_server_error() {
        UNKNOWN_ERROR
    } else {
        status.canonical_reason().unwrap_or(UNKNOWN_ERROR)
    };

    _ = res.replace_body(ResBody::None);

    ApiError::new(status, message).render(res);

    ctrl.skip_rest();
}

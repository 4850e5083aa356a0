//! Customer request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use turtleman::customers::{
    data::CustomerDraft,
    records::{CustomerId, CustomerRecord},
};

/// Customer create/update request. Missing fields are read as empty and rejected by validation.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerRequest {
    /// Given name, 1 to 50 characters
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name, 1 to 50 characters
    #[serde(default)]
    pub last_name: Option<String>,

    /// Unique email address, at most 254 characters
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerRequest {
    pub(crate) fn into_draft(self, id: Option<CustomerId>) -> CustomerDraft {
        CustomerDraft {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// Store-assigned identifier
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    /// When the customer was created (RFC 3339)
    pub created_at: String,

    /// When the customer was last modified (RFC 3339)
    pub modified_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        CustomerResponse {
            id: customer.id.get(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            created_at: customer.created_at.to_string(),
            modified_at: customer.modified_at.to_string(),
        }
    }
}

/// Envelope returned by every customer endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerApiResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerResponse>,
}

impl CustomerApiResponse {
    pub(crate) fn customer(customer: CustomerRecord) -> Self {
        Self {
            success: true,
            message: None,
            customer: Some(customer.into()),
        }
    }

    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            customer: None,
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            customer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_request_fields_become_empty() -> TestResult {
        let request: CustomerRequest = serde_json::from_value(json!({ "first_name": "Man" }))?;

        let draft = request.into_draft(None);

        assert_eq!(draft.first_name, "Man");
        assert_eq!(draft.last_name, "");
        assert_eq!(draft.email, "");

        Ok(())
    }

    #[test]
    fn customer_envelope_omits_message() -> TestResult {
        let customer = CustomerRecord {
            id: CustomerId::new(1),
            first_name: "Man".to_owned(),
            last_name: "Turtle".to_owned(),
            email: "man@turtle.sea".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
            modified_at: Timestamp::UNIX_EPOCH,
        };

        let value = serde_json::to_value(CustomerApiResponse::customer(customer))?;

        assert_eq!(
            value,
            json!({
                "success": true,
                "customer": {
                    "id": 1,
                    "first_name": "Man",
                    "last_name": "Turtle",
                    "email": "man@turtle.sea",
                    "created_at": "1970-01-01T00:00:00Z",
                    "modified_at": "1970-01-01T00:00:00Z",
                },
            })
        );

        Ok(())
    }
}

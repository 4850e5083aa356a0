//! Customers Data

use crate::customers::records::CustomerId;

/// Candidate customer handed to an upsert.
///
/// Without an identifier (or with id zero) the draft describes a new customer, otherwise
/// it replaces the names and email of the customer with that identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerDraft {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl CustomerDraft {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// The customer this draft updates, if any.
    #[must_use]
    pub fn existing_id(&self) -> Option<CustomerId> {
        self.id.filter(|id| id.is_assigned())
    }
}

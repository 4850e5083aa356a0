//! Customer Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Store-assigned customer identifier.
///
/// Identifiers start at one and grow monotonically; zero is never assigned and is read as
/// "no identifier" wherever a candidate record is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this identifier can name a stored record.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(value: CustomerId) -> Self {
        value.get()
    }
}

/// Customer Record
///
/// Always the store's view of a customer: `id`, `created_at` and `modified_at` are
/// assigned by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_assigned_id() {
        assert!(!CustomerId::new(0).is_assigned());
        assert!(CustomerId::new(1).is_assigned());
        assert!(CustomerId::new(-4).is_assigned());
    }

    #[test]
    fn id_displays_as_plain_number() {
        assert_eq!(CustomerId::from(42).to_string(), "42");
        assert_eq!(i64::from(CustomerId::new(7)), 7);
    }
}

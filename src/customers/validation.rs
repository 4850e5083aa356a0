//! Customer field validation.
//!
//! Names must carry at least one non-whitespace character and fit in 50 characters, with no
//! control characters. Emails must be syntactically valid addresses of at most 254 characters,
//! split at the last `@` into a local part (dot-atom or quoted string, at most 64 characters)
//! and a domain (dotted labels or a bracketed address literal). Lengths are counted in
//! characters, not bytes.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    net::{Ipv4Addr, Ipv6Addr},
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::customers::data::CustomerDraft;

pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const EMAIL_LOCAL_PART_MAX_CHARS: usize = 64;
pub const DOMAIN_LABEL_MAX_CHARS: usize = 63;

pub const MUST_NOT_BE_BLANK: &str = "must not be blank";
pub const NAME_TOO_LONG: &str = "must be at most 50 characters";
pub const CONTROL_CHARACTERS: &str = "must not contain control characters";
pub const EMAIL_TOO_LONG: &str = "must be at most 254 characters";
pub const EMAIL_MALFORMED: &str = "must be a well-formed email address";
pub const UNKNOWN_CUSTOMER_ID: &str = "does not name an existing customer";

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static DOT_ATOM_LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("dot-atom local part pattern")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static QUOTED_LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"(?:[^"\\@\x00-\x1F\x7F]|\\[^\x00-\x1F\x7F])*"$"#)
        .expect("quoted local part pattern")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$").expect("domain label pattern")
});

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field rule a candidate customer broke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(field: &'static str, message: &'static str) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.fields.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Whether `field` was rejected at least once.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, error) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{} {}", error.field, error.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check every field rule on `draft`, collecting all failures.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each rejected field when any rule fails.
pub fn validate(draft: &CustomerDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(message) = check_name(&draft.first_name) {
        errors.push("first_name", message);
    }

    if let Some(message) = check_name(&draft.last_name) {
        errors.push("last_name", message);
    }

    if let Some(message) = check_email(&draft.email) {
        errors.push("email", message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some(MUST_NOT_BE_BLANK)
    } else if name.chars().count() > NAME_MAX_CHARS {
        Some(NAME_TOO_LONG)
    } else if name.chars().any(char::is_control) {
        Some(CONTROL_CHARACTERS)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(MUST_NOT_BE_BLANK)
    } else if email.chars().count() > EMAIL_MAX_CHARS {
        Some(EMAIL_TOO_LONG)
    } else if is_valid_email(email) {
        None
    } else {
        Some(EMAIL_MALFORMED)
    }
}

/// Whether `email` is a syntactically valid address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().count() > EMAIL_MAX_CHARS {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.chars().count() <= EMAIL_LOCAL_PART_MAX_CHARS
        && (DOT_ATOM_LOCAL_PART.is_match(local) || QUOTED_LOCAL_PART.is_match(local))
}

fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        return match literal.strip_prefix("IPv6:") {
            Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
            None => literal.parse::<Ipv4Addr>().is_ok(),
        };
    }

    !domain.is_empty()
        && domain.split('.').all(|label| {
            label.chars().count() <= DOMAIN_LABEL_MAX_CHARS && DOMAIN_LABEL.is_match(label)
        })
}

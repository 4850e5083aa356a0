//! Customers

pub mod data;
pub mod errors;
pub mod records;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::CustomersServiceError;
pub use service::*;
pub use store::*;

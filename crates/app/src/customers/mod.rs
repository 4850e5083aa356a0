//! Customers persistence

mod repository;

pub use repository::PgCustomerStore;

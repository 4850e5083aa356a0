//! PostgreSQL persistence and application wiring for TurtleMan.

pub mod context;
pub mod customers;
pub mod database;

#[cfg(test)]
mod test;

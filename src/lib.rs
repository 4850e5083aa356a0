//! TurtleMan
//!
//! Customer record management core: field validation, the create-or-update flow and the
//! translation of store constraint failures into typed domain errors.

pub mod customers;
pub mod stores;

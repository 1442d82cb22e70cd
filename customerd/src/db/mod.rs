//! Database access layer

pub mod customers;

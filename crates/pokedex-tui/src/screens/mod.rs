//! Screen implementations.

pub mod catalog;

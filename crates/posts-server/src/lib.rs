//! Posts HTTP Server Library
//!
//! Exposes the REST API building blocks so integration tests and embedders
//! can assemble the router without going through the binary.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod validation;

//! REST server for the flightdb flight network store.
//!
//! This crate maps the store's operations onto an HTTP surface and its error
//! taxonomy onto status codes; the store itself has no transport vocabulary.
//!
//! # Modules
//!
//! - [`server`] - Router construction and the serve loop
//! - [`handlers`] - One handler per store operation
//! - [`error`] - Store error → status code mapping

#![deny(clippy::unwrap_used)]

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{router, run, AppState};

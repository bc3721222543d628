//! Life insurance recommendation service.
//!
//! The binary in `main.rs` serves the HTTP API; other programs can use the
//! engine directly or relay profiles to a running instance via `client`.

pub mod client;
pub mod config;
pub mod errors;
pub mod intake;
pub mod models;
pub mod recommendation;
pub mod routes;
pub mod state;

//! Zarpay REST API server
//!
//! Thin axum layer over [`zarpay_core`]: handlers delegate to services,
//! services talk to the in-memory store. The router is exposed so
//! integration tests can drive it without binding a socket.

pub mod error;
pub mod routes;

pub use routes::router;

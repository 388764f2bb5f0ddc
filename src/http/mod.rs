//! HTTP server module.
//!
//! Binds the TCP listener and runs the Axum server, with graceful shutdown
//! on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{Server, ServerError};

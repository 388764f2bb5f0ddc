//! pulsed: a minimal HTTP liveness endpoint daemon.
//!
//! Serves exactly one route, `GET /health`, answering `OK` in plain text.
//! Every other request receives a plain-text 404. There is no state and no
//! coordination between requests; the surrounding machinery is ordinary
//! service plumbing for configuration, logging, and signal-driven shutdown.

pub mod config;
pub mod http;
pub mod routes;

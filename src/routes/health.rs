//! Health check endpoint for monitoring systems.
//!
//! Provides a liveness probe that answers 200 OK whenever the process can
//! serve HTTP. Used by Kubernetes, systemd, load balancers, and uptime
//! monitors to verify the process is alive.

/// Health check handler.
///
/// Always reports healthy. This is a liveness probe, not a readiness check:
/// the only thing it proves is that the process is accepting requests.
pub async fn health() -> &'static str {
    "OK\n"
}

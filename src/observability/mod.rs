//! Observability subsystem.
//!
//! Structured logging goes through `tracing` (initialized in `main`);
//! request metrics go through the `metrics` facade with Prometheus
//! exposition. The underlying cause of every upstream failure is logged
//! server-side; clients only ever see the message string in the error
//! envelope.

pub mod metrics;

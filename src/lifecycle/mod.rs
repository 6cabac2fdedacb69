//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup:  load config → validate → bind listener → serve
//! Shutdown: signal received → stop accepting → drain in-flight → exit
//! ```

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Wraps a broadcast channel; the server holds a receiver and stops
/// accepting once a value arrives. Tests trigger it directly, the
/// binary wires it to Ctrl+C.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver that resolves once shutdown is triggered.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal every subscriber to stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

//! Tracing and logging setup shared by binaries and tests that drive the
//! inventory engine.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing subscriber configuration (filters, JSON formatting).
pub mod tracing;

//! Tracing configuration for store actors.
//!
//! Output is filtered through the standard `RUST_LOG` environment variable:
//!
//! ```text
//! RUST_LOG=debug cargo run    # Everything, including per-request logs
//! RUST_LOG=info cargo run     # Lifecycle events only
//! RUST_LOG=warn cargo run     # Rejections and failures only
//! ```

/// Initializes the tracing subscriber for the process.
///
/// Call once at startup, before spawning any actors. Panics if a global
/// subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // Don't show module paths - we use entity_type instead
        .with_target(false)
        // Compact format shows spans inline
        .compact()
        .init();
}

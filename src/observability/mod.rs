//! Observability system for the example agent.
//!
//! Structured logging only: the agent has no transport or endpoints to
//! monitor, so logging is the whole observability surface.

pub mod logging;

// Re-export for convenience
pub use logging::{init_default_logging, init_logging, LogFormat};

// Span macros for structured logging
pub use logging::{lifecycle_span, processing_span};

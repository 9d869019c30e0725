//! Example Agent - Rust Implementation
//!
//! A minimal agent demonstrating the structure shared by agents in this
//! monorepo: construction, a run entry point, and one processing step.
//!
//! # Overview
//!
//! This crate provides:
//! - Agent lifecycle (construction with an optional name, a single terminal run)
//! - One deterministic processing step over a fixed sequence
//! - Optional TOML configuration and `.env` loading
//! - Structured logging via `tracing`
//!
//! # Quick Start
//!
//! ```rust
//! use example_agent::agent::Agent;
//!
//! let agent = Agent::new("DemoAgent");
//! let result = agent.process_data().unwrap();
//! assert_eq!(result.total, 15);
//!
//! // A run consumes the agent; it cannot be reused afterwards.
//! agent.run().unwrap();
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod observability;
pub mod processing;

pub use agent::{Agent, DEFAULT_AGENT_NAME};
pub use config::{AgentConfig, ConfigError};
pub use error::{AgentError, AgentResult};
pub use processing::{ProcessingResult, SAMPLE_ITEMS, STATUS_ACTIVE};

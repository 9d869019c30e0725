//! Agent lifecycle management.
//!
//! An [`Agent`] is constructed once per program run, performs one run, and
//! is discarded. The run is terminal: [`Agent::run`] consumes the agent, so
//! a finished agent cannot be reused.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::AgentResult;
use crate::processing::ProcessingResult;

/// Name used when none is supplied at construction
pub const DEFAULT_AGENT_NAME: &str = "ExampleAgent";

/// A named unit with a creation timestamp that performs one run
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    start_time: DateTime<Utc>,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_NAME)
    }
}

impl Agent {
    /// Create an agent with an explicit name, capturing the current time as
    /// its start time. Construction never fails; the name is unconstrained.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: Utc::now(),
        }
    }

    /// The agent's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The timestamp captured at construction, fixed for the agent's lifetime
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Execute the agent's main logic, writing status lines to stdout.
    pub fn run(self) -> AgentResult<()> {
        self.run_to(&mut io::stdout())
    }

    /// Execute the agent's main logic against an injected output sink.
    ///
    /// Reports the agent's name, start time, runtime version, and working
    /// directory, invokes the processing step exactly once, then writes the
    /// completion message. Failure to read the working directory or to write
    /// to the sink propagates to the caller.
    pub fn run_to(self, out: &mut impl Write) -> AgentResult<()> {
        let span = crate::lifecycle_span!(agent = %self.name);
        let _guard = span.enter();

        info!("Agent run starting");

        writeln!(
            out,
            "[{}] Starting at {}",
            self.name,
            self.start_time.to_rfc3339()
        )?;
        writeln!(
            out,
            "[{}] Runtime: {} v{} (rustc >= {})",
            self.name,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION")
        )?;

        let cwd = std::env::current_dir()?;
        writeln!(out, "[{}] Working directory: {}", self.name, cwd.display())?;

        self.process_data_to(out)?;

        writeln!(out, "[{}] Completed successfully!", self.name)?;
        info!("Agent run complete");
        Ok(())
    }

    /// Run the processing step once, reporting the record and its total to
    /// stdout, and return the record to the caller.
    pub fn process_data(&self) -> AgentResult<ProcessingResult> {
        self.process_data_to(&mut io::stdout())
    }

    /// Run the processing step against an injected output sink.
    pub fn process_data_to(&self, out: &mut impl Write) -> AgentResult<ProcessingResult> {
        let span = crate::processing_span!(agent = %self.name);
        let _guard = span.enter();

        let result = ProcessingResult::over_sample_items();

        writeln!(
            out,
            "[{}] Processing data: {}",
            self.name,
            serde_json::to_string(&result)?
        )?;
        writeln!(out, "[{}] Total: {}", self.name, result.total)?;

        Ok(result)
    }
}

//! Tests for agent lifecycle
//!
//! Covers:
//! - Construction with default and explicit names
//! - The run sequence and its reported output
//! - The terminal nature of a run

use example_agent::agent::{Agent, DEFAULT_AGENT_NAME};

/// Run an agent against an in-memory sink and return the captured output
fn run_captured(agent: Agent) -> String {
    let mut sink = Vec::new();
    agent
        .run_to(&mut sink)
        .expect("Agent run should succeed against an in-memory sink");
    String::from_utf8(sink).expect("Agent output should be valid UTF-8")
}

#[test]
fn test_default_construction_uses_default_name() {
    let agent = Agent::default();
    assert_eq!(agent.name(), DEFAULT_AGENT_NAME);
}

#[test]
fn test_explicit_name_is_preserved() {
    let agent = Agent::new("X");
    assert_eq!(agent.name(), "X");
}

#[test]
fn test_run_reports_agent_name() {
    let agent = Agent::new("NamedRunner");
    let output = run_captured(agent);
    assert!(output.contains("[NamedRunner]"), "Output was: {output}");
}

#[test]
fn test_run_reports_start_timestamp() {
    let agent = Agent::new("Clocked");
    let start = agent.start_time().to_rfc3339();
    let output = run_captured(agent);
    assert!(
        output.contains(&format!("Starting at {start}")),
        "Output was: {output}"
    );
}

#[test]
fn test_run_reports_working_directory() {
    let cwd = std::env::current_dir().unwrap();
    let output = run_captured(Agent::default());
    assert!(
        output.contains(&format!("Working directory: {}", cwd.display())),
        "Output was: {output}"
    );
}

#[test]
fn test_run_reports_runtime_version() {
    let output = run_captured(Agent::default());
    assert!(
        output.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))),
        "Output was: {output}"
    );
}

#[test]
fn test_run_ends_with_completion_message() {
    let agent = Agent::new("Finisher");
    let output = run_captured(agent);
    assert!(
        output.trim_end().ends_with("[Finisher] Completed successfully!"),
        "Output was: {output}"
    );
}

#[test]
fn test_full_run_default_agent() {
    // End-to-end: default construction, then run. Output must carry the
    // default name, the total of the processing step, and the completion
    // message.
    let output = run_captured(Agent::default());

    assert!(output.contains(DEFAULT_AGENT_NAME), "Output was: {output}");
    assert!(output.contains("Total: 15"), "Output was: {output}");
    assert!(
        output.contains("Completed successfully!"),
        "Output was: {output}"
    );
}

#[test]
fn test_run_includes_processing_output() {
    let output = run_captured(Agent::new("Processor"));

    assert!(
        output.contains("[Processor] Processing data:"),
        "Output was: {output}"
    );
    assert!(
        output.contains("\"status\":\"active\""),
        "Output was: {output}"
    );
}

#[test]
fn test_runs_with_unusual_names() {
    // The constructor places no constraints on the name.
    for name in ["", " ", "agent with spaces", "émoji-✓", "[brackets]"] {
        let agent = Agent::new(name);
        let mut sink = Vec::new();
        assert!(
            agent.run_to(&mut sink).is_ok(),
            "Run should succeed for name {name:?}"
        );
    }
}

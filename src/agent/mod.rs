//! Agent lifecycle: construction and the single run entry point.

pub mod lifecycle;

pub use lifecycle::*;

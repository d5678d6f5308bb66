//! CLI library components for the fault message generator.

pub mod logging;
pub mod pipeline;

//! CLI command implementations.

pub mod diff;
pub mod example;
pub mod run;

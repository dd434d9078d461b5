//! Command line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_generate, write_if_changed, GenerateArgs, GenerateResult, WriteMode};

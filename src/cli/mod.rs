//! Command-line interface module.

mod args;
pub mod build;
mod input;

pub use args::{BuildArgs, Cli, Commands};

//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod init;
pub mod probe;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands, ProbeArgs};

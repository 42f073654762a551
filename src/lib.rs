//! Warp packer invocation library
//!
//! Packs a directory of published application files into one self-contained
//! executable by locating and running the external `warp-packer` binary:
//! - Typed, validated settings translated into a fixed command line
//! - Executable discovery across candidate names and search locations
//! - Synchronous execution with exit-code based success
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod setup;
pub mod tool;
pub mod warp;

// Re-export commonly used types
pub use error::{CliError, Result, WarpError};
pub use tool::{
    Environment, HostEnvironment, ProcessArguments, ProcessOutput, ProcessRunner,
    SearchPathLocator, SystemProcessRunner, Tool, ToolLocator, ToolRunner, ToolSettings,
};
pub use warp::{ToolContext, WarpPlatform, WarpRunner, WarpSettings, warp, warp_with_settings};

//! Error types for warp packer invocations.
//!
//! Every failure is detected and reported synchronously. Configuration and
//! platform errors are raised before any tool lookup; lookup errors before any
//! process is spawned.

use thiserror::Error;

/// Result type alias for warp operations
pub type Result<T> = std::result::Result<T, WarpError>;

/// Main error type for all warp operations
#[derive(Error, Debug)]
pub enum WarpError {
    /// A required setting is missing or blank
    #[error("Missing required setting: {field}")]
    Configuration {
        /// Name of the offending settings field
        field: &'static str,
    },

    /// The requested architecture has no vendor token
    #[error("The specified platform/architecture is not supported: {value}")]
    UnsupportedPlatform {
        /// The unrecognized platform value
        value: String,
    },

    /// None of the candidate executables could be located
    #[error("{tool}: Could not locate executable (tried: {})", .candidates.join(", "))]
    ToolNotFound {
        /// Display name of the tool
        tool: String,
        /// Executable names that were searched for, in order
        candidates: Vec<String>,
    },

    /// The tool ran but exited with a non-zero status
    #[error("{tool}: Process returned an error (exit code {exit_code})")]
    ToolExecution {
        /// Display name of the tool
        tool: String,
        /// Exit code reported by the process (-1 when terminated by a signal)
        exit_code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// The resolved executable could not be started
    #[error("Failed to start {command}: {error}")]
    CommandFailed {
        /// Program that failed to start
        command: String,
        /// Underlying spawn error
        #[source]
        error: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl WarpError {
    /// Shorthand for a missing-field configuration error.
    pub fn missing(field: &'static str) -> Self {
        Self::Configuration { field }
    }

    /// Process exit code the CLI should terminate with for this error.
    ///
    /// A failed packer run propagates the packer's own exit code; everything
    /// else maps to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolExecution { exit_code, .. } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Configuration { field } => vec![format!("Provide a value for `{field}`")],
            Self::UnsupportedPlatform { .. } => {
                vec!["Use one of: linux-x64, macos-x64, windows-x64".to_string()]
            }
            Self::ToolNotFound { candidates, .. } => vec![
                format!("Install one of [{}] on PATH", candidates.join(", ")),
                "Or point --tool-path / WARP_PACKER_PATH at the executable".to_string(),
                "Or place it in the ./tools directory".to_string(),
            ],
            Self::ToolExecution { .. } => {
                vec!["Inspect the packer output above for the cause".to_string()]
            }
            Self::CommandFailed { .. } => vec!["Check the executable's file permissions".to_string()],
            Self::Io(_) => vec!["Run from an existing, readable directory".to_string()],
            Self::Cli(_) => vec!["Run with --help for usage".to_string()],
        }
    }
}

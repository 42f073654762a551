//! External tool invocation.
//!
//! An adapter implements [`Tool`] to describe *what* to run: its display name,
//! the executable names it may be distributed under, and how its settings
//! translate into arguments. [`ToolRunner`] owns *how* it runs: resolving
//! the executable through a [`ToolLocator`] and executing it through a
//! [`ProcessRunner`].
//!
//! Each run moves through
//! `Unvalidated → Validated → Resolved → Executing → {Succeeded, Failed}`;
//! nothing is retried.

mod arguments;
mod environment;
mod locator;
mod process;
mod settings;

pub use arguments::ProcessArguments;
pub use environment::{Environment, HostEnvironment};
pub use locator::{DEFAULT_TOOLS_DIRECTORY, SearchPathLocator, ToolLocator};
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use settings::ToolSettings;

use crate::error::{Result, WarpError};
use std::path::PathBuf;

/// Describes an external executable and its command line.
pub trait Tool {
    /// Settings type consumed by a single run.
    type Settings;

    /// Display name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Acceptable executable names, most preferred first.
    fn executable_names(&self) -> &'static [&'static str];

    /// The generic tool settings embedded in `settings`.
    fn tool_settings<'a>(&self, settings: &'a Self::Settings) -> &'a ToolSettings;

    /// Validates `settings` and builds the argument list.
    ///
    /// Must not touch the file system or spawn anything.
    fn arguments(&self, settings: &Self::Settings) -> Result<ProcessArguments>;
}

/// Runs [`Tool`]s using pluggable discovery and execution.
#[derive(Clone, Debug)]
pub struct ToolRunner<L, P> {
    locator: L,
    process_runner: P,
}

impl ToolRunner<SearchPathLocator, SystemProcessRunner> {
    /// Runner using the host `PATH`, `./tools` and real processes.
    pub fn system(environment: &impl Environment) -> Self {
        Self::new(SearchPathLocator::new(environment), SystemProcessRunner)
    }
}

impl<L: ToolLocator, P: ProcessRunner> ToolRunner<L, P> {
    /// Creates a runner from its collaborators.
    pub fn new(locator: L, process_runner: P) -> Self {
        Self {
            locator,
            process_runner,
        }
    }

    /// The locator used to resolve executables.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// The process runner used to execute tools.
    pub fn process_runner(&self) -> &P {
        &self.process_runner
    }

    /// Resolves the executable for `tool`.
    pub fn resolve<T: Tool>(&self, tool: &T, settings: &ToolSettings) -> Result<PathBuf> {
        let names = tool.executable_names();
        self.locator
            .locate(names, settings)
            .ok_or_else(|| WarpError::ToolNotFound {
                tool: tool.name().to_string(),
                candidates: match &settings.tool_path {
                    Some(path) => vec![path.display().to_string()],
                    None => names.iter().map(|n| n.to_string()).collect(),
                },
            })
    }

    /// Validates, resolves and executes `tool` once, blocking until it exits.
    pub fn run<T: Tool>(&self, tool: &T, settings: &T::Settings) -> Result<ProcessOutput> {
        let arguments = tool.arguments(settings)?;
        let tool_settings = tool.tool_settings(settings);

        let program = self.resolve(tool, tool_settings)?;
        log::info!("Running {}: {} {}", tool.name(), program.display(), arguments);

        let output = self.process_runner.run(&program, &arguments, tool_settings)?;
        if !output.success() {
            log::error!("{} exited with code {}", tool.name(), output.exit_code);
            return Err(WarpError::ToolExecution {
                tool: tool.name().to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        log::info!("✓ {} completed", tool.name());
        Ok(output)
    }
}

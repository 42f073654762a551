//! warp-packer runner.

use super::WarpSettings;
use crate::error::{Result, WarpError};
use crate::tool::{
    Environment, HostEnvironment, ProcessArguments, ProcessRunner, SearchPathLocator,
    SystemProcessRunner, Tool, ToolLocator, ToolRunner, ToolSettings,
};
use std::ffi::OsString;
use std::path::Path;

/// Executable names warp-packer is distributed under, most preferred first.
const EXECUTABLE_NAMES: &[&str] = &["warp-packer", "warp-packer.exe"];

/// Passes [`WarpSettings`] to the warp packer.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_warp::{HostEnvironment, WarpPlatform, WarpRunner, WarpSettings};
///
/// # fn example() -> kodegen_bundler_warp::Result<()> {
/// let runner = WarpRunner::system(HostEnvironment::capture()?);
/// let settings = WarpSettings::new(
///     "./artifacts/output",
///     "MyApp",
///     "./artifacts/myapp",
///     WarpPlatform::LinuxX64,
/// );
/// runner.run(Some(&settings))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct WarpRunner<E = HostEnvironment, L = SearchPathLocator, P = SystemProcessRunner> {
    environment: E,
    runner: ToolRunner<L, P>,
}

impl<E: Environment> WarpRunner<E, SearchPathLocator, SystemProcessRunner> {
    /// Runner that searches `./tools` and `PATH` and spawns real processes.
    pub fn system(environment: E) -> Self {
        let runner = ToolRunner::system(&environment);
        Self {
            environment,
            runner,
        }
    }
}

impl<E: Environment, L: ToolLocator, P: ProcessRunner> WarpRunner<E, L, P> {
    /// Creates a runner from explicit host collaborators.
    pub fn new(environment: E, locator: L, process_runner: P) -> Self {
        Self {
            environment,
            runner: ToolRunner::new(locator, process_runner),
        }
    }

    /// The underlying generic runner.
    pub fn tool_runner(&self) -> &ToolRunner<L, P> {
        &self.runner
    }

    /// Packs according to `settings`, blocking until warp-packer exits.
    ///
    /// Checks run in a fixed order so the first violated precondition is the
    /// one reported: settings present, input directory, executable name,
    /// output path, architecture, executable lookup, exit code.
    ///
    /// Existence of the input directory and executable is left to warp-packer.
    pub fn run(&self, settings: Option<&WarpSettings>) -> Result<()> {
        let settings = settings.ok_or_else(|| WarpError::missing("settings"))?;
        self.runner.run(self, settings)?;
        Ok(())
    }

    /// Builds the warp-packer command line as raw argv tokens.
    pub fn arguments(&self, settings: &WarpSettings) -> Result<Vec<OsString>> {
        Ok(Tool::arguments(self, settings)?.to_args())
    }

    /// Builds the warp-packer command line for display, quoting paths.
    pub fn command_line(&self, settings: &WarpSettings) -> Result<String> {
        Ok(Tool::arguments(self, settings)?.render())
    }
}

impl<E: Environment, L, P> WarpRunner<E, L, P> {
    fn full_path(&self, path: &Path) -> OsString {
        self.environment.full_path(path).into_os_string()
    }
}

impl<E: Environment, L, P> Tool for WarpRunner<E, L, P> {
    type Settings = WarpSettings;

    fn name(&self) -> &'static str {
        "Warp Packer"
    }

    fn executable_names(&self) -> &'static [&'static str] {
        EXECUTABLE_NAMES
    }

    fn tool_settings<'a>(&self, settings: &'a WarpSettings) -> &'a ToolSettings {
        &settings.tool
    }

    fn arguments(&self, settings: &WarpSettings) -> Result<ProcessArguments> {
        let input_directory = settings
            .input_directory
            .as_deref()
            .ok_or_else(|| WarpError::missing("input_directory"))?;

        if settings.executable_name.trim().is_empty() {
            return Err(WarpError::missing("executable_name"));
        }

        let output_file_path = settings
            .output_file_path
            .as_deref()
            .ok_or_else(|| WarpError::missing("output_file_path"))?;

        let architecture = settings.architecture.vendor_token()?;

        let mut arguments = ProcessArguments::new();
        arguments
            .append_switch("--arch", architecture)
            .append_switch_quoted("--input_dir", self.full_path(input_directory))
            .append_switch_quoted("--exec", settings.executable_name.as_str())
            .append_switch_quoted("--output", self.full_path(output_file_path));

        Ok(arguments)
    }
}

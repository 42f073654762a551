//! Settings for a single warp-packer run.

use super::WarpPlatform;
use crate::tool::ToolSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One packing request.
///
/// Plain data: nothing is validated until the settings reach
/// [`WarpRunner::run`](super::WarpRunner::run), so they can be built up
/// field by field.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_warp::{WarpPlatform, WarpSettings};
///
/// let settings = WarpSettings::new(
///     "./artifacts/output",
///     "MyApp",
///     "./artifacts/myapp",
///     WarpPlatform::LinuxX64,
/// );
/// assert_eq!(settings.executable_name, "MyApp");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpSettings {
    /// Directory whose contents are packed.
    pub input_directory: Option<PathBuf>,

    /// File inside `input_directory` launched by the packed executable.
    ///
    /// Include the `.exe` suffix when targeting Windows.
    pub executable_name: String,

    /// Where the packed executable is written.
    pub output_file_path: Option<PathBuf>,

    /// Platform to pack for.
    pub architecture: WarpPlatform,

    /// Executable lookup and process options.
    #[serde(flatten)]
    pub tool: ToolSettings,
}

impl WarpSettings {
    /// Creates settings from the four packing inputs.
    pub fn new<I, E, O>(
        input_directory: I,
        executable_name: E,
        output_file_path: O,
        architecture: WarpPlatform,
    ) -> Self
    where
        I: AsRef<Path>,
        E: Into<String>,
        O: AsRef<Path>,
    {
        Self {
            input_directory: Some(input_directory.as_ref().to_path_buf()),
            executable_name: executable_name.into(),
            output_file_path: Some(output_file_path.as_ref().to_path_buf()),
            architecture,
            tool: ToolSettings::default(),
        }
    }

    /// Sets the input directory.
    pub fn with_input_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.input_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the executable name.
    pub fn with_executable_name(mut self, name: impl Into<String>) -> Self {
        self.executable_name = name.into();
        self
    }

    /// Sets the output file path.
    pub fn with_output_file_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_file_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the target platform.
    pub fn with_architecture(mut self, architecture: WarpPlatform) -> Self {
        self.architecture = architecture;
        self
    }

    /// Replaces the tool settings.
    pub fn with_tool_settings(mut self, tool: ToolSettings) -> Self {
        self.tool = tool;
        self
    }
}

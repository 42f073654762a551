//! Settings shared by every external tool invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Per-invocation settings understood by every [`Tool`](super::Tool).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Explicit executable path. When set, no other location is searched.
    pub tool_path: Option<PathBuf>,

    /// Working directory for the spawned process.
    ///
    /// Defaults to the host working directory.
    pub working_directory: Option<PathBuf>,

    /// Extra environment variables for the spawned process.
    pub environment_variables: BTreeMap<String, String>,
}

impl ToolSettings {
    /// Sets the explicit tool path.
    pub fn with_tool_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.tool_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the working directory of the spawned process.
    pub fn with_working_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds an environment variable for the spawned process.
    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables.insert(key.into(), value.into());
        self
    }
}

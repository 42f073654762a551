//! Executable discovery.
//!
//! Resolution order for a tool with candidate names `[a, b]`:
//!
//! 1. `ToolSettings::tool_path`, exclusively, when set
//! 2. `<tools_directory>/a`, then `a` on the search path
//! 3. `<tools_directory>/b`, then `b` on the search path

use super::{Environment, ToolSettings};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default tools directory, relative to the working directory.
pub const DEFAULT_TOOLS_DIRECTORY: &str = "tools";

/// Maps candidate executable names to a concrete path.
pub trait ToolLocator {
    /// Returns the first candidate found, or `None`.
    fn locate(&self, names: &[&str], settings: &ToolSettings) -> Option<PathBuf>;
}

/// Locator searching an explicit override, a tools directory and `PATH`.
#[derive(Clone, Debug)]
pub struct SearchPathLocator {
    working_directory: PathBuf,
    tools_directory: PathBuf,
    search_path: Option<OsString>,
}

impl SearchPathLocator {
    /// Creates a locator configured from the host environment.
    pub fn new(environment: &impl Environment) -> Self {
        Self {
            working_directory: environment.working_directory().to_path_buf(),
            tools_directory: environment.full_path(Path::new(DEFAULT_TOOLS_DIRECTORY)),
            search_path: environment.search_path().cloned(),
        }
    }

    /// Overrides the tools directory.
    pub fn with_tools_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        self.tools_directory = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.working_directory.join(dir)
        };
        self
    }

    /// Overrides the executable search path.
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    /// The directory searched before `PATH`.
    pub fn tools_directory(&self) -> &Path {
        &self.tools_directory
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory.join(path)
        }
    }
}

impl ToolLocator for SearchPathLocator {
    fn locate(&self, names: &[&str], settings: &ToolSettings) -> Option<PathBuf> {
        if let Some(tool_path) = &settings.tool_path {
            let tool_path = self.absolute(tool_path);
            if tool_path.is_file() {
                log::debug!("Using configured tool path: {}", tool_path.display());
                return Some(tool_path);
            }
            log::debug!("Configured tool path does not exist: {}", tool_path.display());
            return None;
        }

        for name in names {
            let candidate = self.tools_directory.join(name);
            if candidate.is_file() {
                log::debug!("Found {} in tools directory: {}", name, candidate.display());
                return Some(candidate);
            }

            match which::which_in(name, self.search_path.as_ref(), &self.working_directory) {
                Ok(path) => {
                    log::debug!("Found {} on search path: {}", name, path.display());
                    return Some(path);
                }
                Err(e) => log::trace!("{} not on search path: {}", name, e),
            }
        }

        None
    }
}

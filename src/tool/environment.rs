//! Host environment access.

use crate::error::Result;
use path_absolutize::Absolutize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Host information needed to normalize paths and search for executables.
pub trait Environment {
    /// Directory relative paths are resolved against.
    fn working_directory(&self) -> &Path;

    /// Executable search path (`PATH`), if any.
    fn search_path(&self) -> Option<&OsString>;

    /// Absolute, normalized form of `path`.
    ///
    /// Purely lexical: the path is not required to exist.
    fn full_path(&self, path: &Path) -> PathBuf {
        match path.absolutize_from(self.working_directory()) {
            Ok(full) => full.into_owned(),
            Err(e) => {
                log::debug!("Could not normalize {}: {}", path.display(), e);
                self.working_directory().join(path)
            }
        }
    }
}

/// Snapshot of the current process environment.
#[derive(Clone, Debug)]
pub struct HostEnvironment {
    working_directory: PathBuf,
    search_path: Option<OsString>,
}

impl HostEnvironment {
    /// Captures the working directory and `PATH` of the current process.
    ///
    /// Fails when the working directory cannot be read, since every relative
    /// path is resolved against it.
    pub fn capture() -> Result<Self> {
        let working_directory = std::env::current_dir().map_err(|e| {
            io::Error::new(e.kind(), format!("cannot read current directory: {e}"))
        })?;

        Ok(Self {
            working_directory,
            search_path: std::env::var_os("PATH"),
        })
    }

    /// Builds an environment from explicit values.
    pub fn new(working_directory: PathBuf, search_path: Option<OsString>) -> Self {
        Self {
            working_directory,
            search_path,
        }
    }
}

impl Environment for HostEnvironment {
    fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    fn search_path(&self) -> Option<&OsString> {
        self.search_path.as_ref()
    }
}

//! Shared test doubles for runner tests.

#![allow(dead_code)]

use kodegen_bundler_warp::{
    HostEnvironment, ProcessArguments, ProcessOutput, ProcessRunner, Result, ToolLocator,
    ToolSettings, WarpRunner,
};
use std::cell::{Cell, RefCell};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Locator returning a fixed answer and counting lookups.
#[derive(Debug, Default)]
pub struct FixedLocator {
    pub found: Option<PathBuf>,
    pub lookups: Cell<usize>,
    pub names: RefCell<Vec<String>>,
}

impl FixedLocator {
    pub fn found(path: &str) -> Self {
        Self {
            found: Some(PathBuf::from(path)),
            ..Default::default()
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

impl ToolLocator for FixedLocator {
    fn locate(&self, names: &[&str], _settings: &ToolSettings) -> Option<PathBuf> {
        self.lookups.set(self.lookups.get() + 1);
        *self.names.borrow_mut() = names.iter().map(|n| n.to_string()).collect();
        self.found.clone()
    }
}

/// Process runner that records invocations and reports a fixed exit code.
#[derive(Debug, Default)]
pub struct RecordingProcessRunner {
    pub exit_code: i32,
    pub calls: RefCell<Vec<(PathBuf, Vec<OsString>)>>,
}

impl RecordingProcessRunner {
    pub fn exiting(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Default::default()
        }
    }

    pub fn spawn_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        _settings: &ToolSettings,
    ) -> Result<ProcessOutput> {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), arguments.to_args()));
        Ok(ProcessOutput {
            exit_code: self.exit_code,
            stdout: String::new(),
            stderr: if self.exit_code == 0 {
                String::new()
            } else {
                "packing failed".to_string()
            },
        })
    }
}

pub type FakeRunner = WarpRunner<HostEnvironment, FixedLocator, RecordingProcessRunner>;

/// Runner rooted at `/work` with no search path.
pub fn runner(locator: FixedLocator, process_runner: RecordingProcessRunner) -> FakeRunner {
    WarpRunner::new(
        HostEnvironment::new(PathBuf::from("/work"), None),
        locator,
        process_runner,
    )
}

/// Writes an executable shell script into `dir`.
///
/// The file is synced and closed before the first exec. A copy of the write
/// descriptor can still be held by a child forked concurrently by another
/// test, which makes exec fail with `ExecutableFileBusy` until that child
/// execs; the script is therefore run once with `STUB_PREFLIGHT` set (which
/// exits immediately) until it starts cleanly.
#[cfg(unix)]
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::io::{ErrorKind, Write};
    use std::os::unix::fs::PermissionsExt;
    use std::time::Duration;

    let path = dir.join(name);
    {
        let mut file = std::fs::File::create(&path).expect("create stub");
        write!(file, "#!/bin/sh\n[ -n \"$STUB_PREFLIGHT\" ] && exit 0\n{body}\n")
            .expect("write stub");
        file.sync_all().expect("sync stub");
    }
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod stub");

    for _ in 0..50 {
        match std::process::Command::new(&path)
            .env("STUB_PREFLIGHT", "1")
            .status()
        {
            Ok(status) => {
                assert!(status.success(), "stub preflight failed: {status}");
                return path;
            }
            Err(e) if e.kind() == ErrorKind::ExecutableFileBusy => {
                std::thread::sleep(Duration::from_millis(20));
            }
            Err(e) => panic!("stub {} did not start: {e}", path.display()),
        }
    }
    panic!("stub {} stayed busy", path.display());
}

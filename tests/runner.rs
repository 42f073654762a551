//! Run outcomes and validation order, with injected collaborators.

mod common;

use common::{FixedLocator, RecordingProcessRunner, runner};
use kodegen_bundler_warp::{WarpError, WarpPlatform, WarpSettings};
use std::path::PathBuf;

fn valid() -> WarpSettings {
    WarpSettings::new("/out/pub", "app", "/out/app-bin", WarpPlatform::LinuxX64)
}

fn missing_field(result: kodegen_bundler_warp::Result<()>) -> &'static str {
    match result {
        Err(WarpError::Configuration { field }) => field,
        other => panic!("expected Configuration error, got {other:?}"),
    }
}

#[test]
fn missing_settings_is_a_configuration_error() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );

    assert_eq!(missing_field(runner.run(None)), "settings");
    assert_eq!(runner.tool_runner().locator().lookups.get(), 0);
    assert_eq!(runner.tool_runner().process_runner().spawn_count(), 0);
}

#[test]
fn missing_input_directory_is_reported_first() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );
    let settings = WarpSettings {
        input_directory: None,
        executable_name: "   ".into(),
        output_file_path: None,
        architecture: WarpPlatform::Unsupported("sparc".into()),
        ..Default::default()
    };

    assert_eq!(missing_field(runner.run(Some(&settings))), "input_directory");
    assert_eq!(runner.tool_runner().process_runner().spawn_count(), 0);
}

#[test]
fn blank_executable_name_is_rejected() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );

    for name in ["", " ", "\t\n"] {
        let settings = valid()
            .with_executable_name(name)
            .with_architecture(WarpPlatform::Unsupported("sparc".into()));
        assert_eq!(missing_field(runner.run(Some(&settings))), "executable_name");
    }
    assert_eq!(runner.tool_runner().locator().lookups.get(), 0);
}

#[test]
fn missing_output_path_is_rejected() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );
    let settings = WarpSettings {
        output_file_path: None,
        ..valid()
    };

    assert_eq!(missing_field(runner.run(Some(&settings))), "output_file_path");
}

#[test]
fn unsupported_platform_skips_lookup_and_spawn() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );
    let settings = valid().with_architecture(WarpPlatform::Unsupported("linux-arm64".into()));

    assert!(matches!(
        runner.run(Some(&settings)),
        Err(WarpError::UnsupportedPlatform { .. })
    ));
    assert_eq!(runner.tool_runner().locator().lookups.get(), 0);
    assert_eq!(runner.tool_runner().process_runner().spawn_count(), 0);
}

#[test]
fn tool_not_found_lists_candidates() {
    let runner = runner(FixedLocator::missing(), RecordingProcessRunner::default());

    match runner.run(Some(&valid())) {
        Err(WarpError::ToolNotFound { tool, candidates }) => {
            assert_eq!(tool, "Warp Packer");
            assert_eq!(candidates, ["warp-packer", "warp-packer.exe"]);
        }
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
    assert_eq!(
        *runner.tool_runner().locator().names.borrow(),
        ["warp-packer", "warp-packer.exe"]
    );
    assert_eq!(runner.tool_runner().process_runner().spawn_count(), 0);
}

#[test]
fn zero_exit_code_succeeds() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::exiting(0),
    );

    runner.run(Some(&valid())).unwrap();

    let calls = runner.tool_runner().process_runner().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, PathBuf::from("/tools/warp-packer"));
    assert_eq!(calls[0].1[..2], ["--arch", "linux-x64"]);
}

#[test]
fn non_zero_exit_code_is_reported() {
    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::exiting(2),
    );

    match runner.run(Some(&valid())) {
        Err(err @ WarpError::ToolExecution { .. }) => {
            assert_eq!(err.exit_code(), 2);
            if let WarpError::ToolExecution { exit_code, stderr, .. } = err {
                assert_eq!(exit_code, 2);
                assert_eq!(stderr, "packing failed");
            }
        }
        other => panic!("expected ToolExecution, got {other:?}"),
    }
}

#[test]
fn unknown_architecture_survives_deserialization() {
    let settings: WarpSettings = serde_json::from_str(
        r#"{
            "input_directory": "/out/pub",
            "executable_name": "app",
            "output_file_path": "/out/app-bin",
            "architecture": "freebsd-x64"
        }"#,
    )
    .unwrap();
    assert_eq!(
        settings.architecture,
        WarpPlatform::Unsupported("freebsd-x64".into())
    );

    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::default(),
    );
    assert!(matches!(
        runner.run(Some(&settings)),
        Err(WarpError::UnsupportedPlatform { value }) if value == "freebsd-x64"
    ));
}

#[test]
fn settings_deserialize_tool_options() {
    let settings: WarpSettings = serde_json::from_str(
        r#"{
            "executable_name": "app",
            "architecture": "macos-x64",
            "tool_path": "/opt/warp/warp-packer",
            "environment_variables": { "WARP_LOG": "1" }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.architecture, WarpPlatform::MacOsX64);
    assert_eq!(settings.input_directory, None);
    assert_eq!(
        settings.tool.tool_path,
        Some(PathBuf::from("/opt/warp/warp-packer"))
    );
    assert_eq!(settings.tool.environment_variables["WARP_LOG"], "1");
}

#[test]
fn aliases_run_through_the_context() {
    use kodegen_bundler_warp::{HostEnvironment, ToolContext, warp, warp_with_settings};

    let context = |exit_code| ToolContext {
        environment: HostEnvironment::new(PathBuf::from("/work"), None),
        locator: FixedLocator::found("/tools/warp-packer"),
        process_runner: RecordingProcessRunner::exiting(exit_code),
    };

    warp(context(0), "pub", "app", "app-bin", WarpPlatform::LinuxX64).unwrap();

    assert!(matches!(
        warp(context(0), "pub", "", "app-bin", WarpPlatform::LinuxX64),
        Err(WarpError::Configuration {
            field: "executable_name"
        })
    ));
    assert!(matches!(
        warp_with_settings(context(5), &valid()),
        Err(WarpError::ToolExecution { exit_code: 5, .. })
    ));
}

#[cfg(unix)]
#[test]
fn non_utf8_paths_reach_the_process_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let runner = runner(
        FixedLocator::found("/tools/warp-packer"),
        RecordingProcessRunner::exiting(0),
    );
    let settings = WarpSettings::new(
        PathBuf::from(OsStr::from_bytes(b"/out/pub\xff")),
        "app",
        PathBuf::from(OsStr::from_bytes(b"/out/app-\xfebin")),
        WarpPlatform::LinuxX64,
    );

    runner.run(Some(&settings)).unwrap();

    let calls = runner.tool_runner().process_runner().calls.borrow();
    let argv = &calls[0].1;
    assert_eq!(argv[2], "--input_dir");
    assert_eq!(argv[3].clone().into_vec(), b"/out/pub\xff");
    assert_eq!(argv[6], "--output");
    assert_eq!(argv[7].clone().into_vec(), b"/out/app-\xfebin");
}

//! Command line argument parsing and validation.

use crate::tool::ToolSettings;
use crate::warp::{WarpPlatform, WarpSettings};
use clap::Parser;
use std::path::PathBuf;

/// Packs a published application directory into a single executable
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_warp",
    version,
    about = "Packs a published application directory into a single executable",
    long_about = "Runs warp-packer to turn a directory of published application files into one
self-contained executable.

warp-packer is looked up as `warp-packer` then `warp-packer.exe`, first in the
tools directory (./tools by default), then on PATH. --tool-path bypasses the search.

Usage:
  kodegen_bundler_warp --input-dir ./publish --exec myapp --output ./myapp
  kodegen_bundler_warp -i ./publish -e MyApp.exe -o ./myapp.exe --arch windows-x64

Exit code 0 = warp-packer succeeded. A failing warp-packer's exit code is passed through."
)]
pub struct Args {
    /// Directory containing the published application files
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// File inside the input directory to launch (include .exe for Windows)
    #[arg(short = 'e', long = "exec", value_name = "NAME")]
    pub executable_name: String,

    /// Path of the packed executable to create
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,

    /// Target platform: linux-x64, macos-x64, windows-x64 (default: host)
    #[arg(short = 'a', long, value_name = "PLATFORM")]
    pub arch: Option<String>,

    /// Explicit path to the warp-packer executable
    #[arg(long, env = "WARP_PACKER_PATH", value_name = "PATH")]
    pub tool_path: Option<PathBuf>,

    /// Directory searched for warp-packer before PATH
    #[arg(long, env = "WARP_TOOLS_DIR", value_name = "DIR")]
    pub tools_dir: Option<PathBuf>,

    /// Validate and print the warp-packer command line without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.arch.is_none() && WarpPlatform::host().is_none() {
            return Err(
                "--arch is required: the host is not one of linux-x64, macos-x64, windows-x64"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Target platform, falling back to the host platform.
    pub fn platform(&self) -> WarpPlatform {
        match &self.arch {
            Some(arch) => WarpPlatform::from(arch.clone()),
            None => WarpPlatform::host().unwrap_or_default(),
        }
    }

    /// Settings for a single warp run.
    pub fn to_settings(&self) -> WarpSettings {
        let mut tool = ToolSettings::default();
        if let Some(path) = &self.tool_path {
            tool = tool.with_tool_path(path);
        }

        WarpSettings::new(
            &self.input_dir,
            self.executable_name.clone(),
            &self.output,
            self.platform(),
        )
        .with_tool_settings(tool)
    }
}

//! Warp packer integration.
//!
//! Turns a directory of published application files into a single
//! self-contained executable by running
//! [warp-packer](https://github.com/dgiagio/warp):
//!
//! ```text
//! warp-packer --arch linux-x64 --input_dir "/out/pub" --exec "app" --output "/out/app-bin"
//! ```
//!
//! [`warp`] and [`warp_with_settings`] are the host-facing entry points;
//! [`WarpRunner`] can be used directly when the collaborators are injected.

mod platform;
mod runner;
mod settings;

pub use platform::WarpPlatform;
pub use runner::WarpRunner;
pub use settings::WarpSettings;

use crate::error::Result;
use crate::tool::{Environment, ProcessRunner, ToolLocator};
use std::path::Path;

/// Host capabilities a warp run depends on.
#[derive(Clone, Debug)]
pub struct ToolContext<E, L, P> {
    /// Path normalization and search path information
    pub environment: E,
    /// Executable discovery
    pub locator: L,
    /// Process spawning
    pub process_runner: P,
}

/// Packs `input_directory` into `output_file_path`, launching `executable_name`.
///
/// `executable_name` must already exist in `input_directory` and include
/// `.exe` when targeting Windows.
pub fn warp<E, L, P>(
    context: ToolContext<E, L, P>,
    input_directory: impl AsRef<Path>,
    executable_name: &str,
    output_file_path: impl AsRef<Path>,
    architecture: WarpPlatform,
) -> Result<()>
where
    E: Environment,
    L: ToolLocator,
    P: ProcessRunner,
{
    let settings = WarpSettings::new(
        input_directory,
        executable_name,
        output_file_path,
        architecture,
    );
    warp_with_settings(context, &settings)
}

/// Runs warp-packer with the given settings.
pub fn warp_with_settings<E, L, P>(
    context: ToolContext<E, L, P>,
    settings: &WarpSettings,
) -> Result<()>
where
    E: Environment,
    L: ToolLocator,
    P: ProcessRunner,
{
    crate::setup::initialize();

    let runner = WarpRunner::new(context.environment, context.locator, context.process_runner);
    runner.run(Some(settings))
}

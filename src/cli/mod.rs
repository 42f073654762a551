//! Command line interface for the warp packer front end.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::tool::{HostEnvironment, SearchPathLocator, SystemProcessRunner, Tool};
use crate::warp::WarpRunner;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args)
}

/// Executes already-parsed arguments against the host environment.
pub fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let environment = HostEnvironment::capture()?;
    let mut locator = SearchPathLocator::new(&environment);
    if let Some(dir) = &args.tools_dir {
        locator = locator.with_tools_directory(dir);
    }

    let runner = WarpRunner::new(environment, locator, SystemProcessRunner);
    let settings = args.to_settings();

    if args.dry_run {
        let command_line = runner.command_line(&settings)?;
        let program = runner
            .tool_runner()
            .resolve(&runner, runner.tool_settings(&settings))?;
        println!("{} {}", program.display(), command_line);
        return Ok(0);
    }

    runner.run(Some(&settings))?;
    Ok(0)
}

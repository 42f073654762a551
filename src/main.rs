//! Kodegen Bundler Warp - single-file executable packer front end.
//!
//! Runs warp-packer over a published application directory and exits with
//! warp-packer's own exit code when it fails.

use kodegen_bundler_warp::{cli, setup};
use std::process;

fn main() {
    // Initialize logging
    setup::initialize();

    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  • {}", suggestion);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}

//! dirmap - Print a directory tree as nested JSON

use std::env;
use std::process::ExitCode;

use dirmap::{build, output_tree};

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Tree printed successfully
/// - `ERROR` (2): Runtime error (unreadable directory, I/O error, etc.)
mod exit_code {
    /// Tree printed successfully
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
}

fn main() -> ExitCode {
    match run() {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run() -> anyhow::Result<()> {
    // No flags or arguments; the root is always the current directory
    let root = env::current_dir()?;
    let tree = build(&root)?;
    output_tree(&tree)?;
    Ok(())
}

//! addin_build - build orchestrator for the Outlook Planner add-in.
//!
//! Checks prerequisites, installs dependencies, audits the manifest, runs
//! the bundler and records build provenance. Exit code 0 means the build
//! succeeded and the record was written.

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match addin_build::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

//! workspace-bump - set one version across a monorepo workspace.

use std::process;
use workspace_bump::cli;
use workspace_bump::cli::OutputManager;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Fatal error: {e}"));
            process::exit(e.exit_code());
        }
    }
}

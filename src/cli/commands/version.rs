//! `vault-opener version` — display version.

use console::style;

use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("vault-opener {current}");
    println!(
        "{}",
        style("Offline only: this tool never touches the network.").dim()
    );
    Ok(())
}

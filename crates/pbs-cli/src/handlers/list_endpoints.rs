//! `list-endpoints` command handler.

use anyhow::Result;

use pbs_core::endpoints::KNOWN_ENDPOINTS;

/// Print the catalog of known PBS API endpoints.
pub fn execute() -> Result<()> {
    println!("Available PBS API Endpoints:");
    println!();
    for endpoint in KNOWN_ENDPOINTS {
        println!("{endpoint}");
    }
    Ok(())
}

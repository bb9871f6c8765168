//! Shared construction of the CLI's collaborators.

use anyhow::{Context, Result};
use directories::ProjectDirs;

use fixwell_core::ServiceUrl;
use fixwell_store::FileSessionStore;

/// Resolve the session store in the per-user data directory.
///
/// The store is handed to the flow and the gate explicitly; nothing else
/// touches the session file.
pub fn session_store() -> Result<FileSessionStore> {
    let dirs =
        ProjectDirs::from("", "", "fixwell-admin").context("Could not determine data directory")?;

    Ok(FileSessionStore::new(dirs.data_dir()))
}

/// Parse the admin API base URL.
pub fn api_base(api: &str) -> Result<ServiceUrl> {
    ServiceUrl::new(api).context("Invalid admin API URL")
}

//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fixwell_core::SessionStore;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let store = context::session_store()?;

    // Unconditional and idempotent: clearing an absent session is a no-op.
    store.clear().context("Failed to clear session")?;

    output::success("Signed out");

    Ok(())
}

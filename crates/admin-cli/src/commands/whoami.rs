//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fixwell_core::AuthGate;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let gate = AuthGate::new(context::session_store()?);

    let session = gate
        .authorize()
        .context("No active session. Run 'fixadmin login' first.")?;

    output::field("Phone", session.identifier().as_str());
    if let Some(name) = session.display_name() {
        output::field("Name", name);
    }
    output::field("Signed in", &session.logged_in_at().to_rfc3339());

    Ok(())
}

//! Subcommand implementations.

pub mod login;
pub mod logout;
pub mod passthrough;
pub mod whoami;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn handle(cli: Cli) -> Result<()> {
    let api = cli.api;

    match cli.command {
        Commands::Login(args) => login::run(args, &api).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
        Commands::Vendors(args) => passthrough::vendors(args, &api).await,
        Commands::Notifications(args) => passthrough::notifications(args, &api).await,
        Commands::Catalog(args) => passthrough::catalog(args, &api).await,
        Commands::Reminders(args) => passthrough::reminders(args, &api).await,
    }
}

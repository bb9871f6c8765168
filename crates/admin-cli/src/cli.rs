//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{login, logout, passthrough, whoami};

/// Operations console for the fixwell home-services marketplace.
#[derive(Parser, Debug)]
#[command(name = "fixadmin")]
#[command(author, version = env!("FIXADMIN_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Admin API base URL
    #[arg(long, global = true, default_value = "https://api.fixwell.app")]
    pub api: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with a phone number and one-time passcode
    Login(login::LoginArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Clear the active session
    Logout(logout::LogoutArgs),

    /// List marketplace vendors
    Vendors(passthrough::VendorsArgs),

    /// List operational notifications
    Notifications(passthrough::NotificationsArgs),

    /// Show the service catalog
    Catalog(passthrough::CatalogArgs),

    /// List reminder follow-ups
    Reminders(passthrough::RemindersArgs),
}

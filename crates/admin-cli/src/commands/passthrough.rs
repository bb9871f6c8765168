//! Protected pass-through views over the admin resource endpoints.
//!
//! These commands do not interpret the payloads they fetch; the data
//! shapes belong to the collaborating services. The session layer only
//! gates access.

use anyhow::{Context, Result, bail};
use clap::Args;

use fixwell_core::AuthGate;
use fixwell_http::AdminApi;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct VendorsArgs {}

#[derive(Args, Debug)]
pub struct NotificationsArgs {}

#[derive(Args, Debug)]
pub struct CatalogArgs {}

#[derive(Args, Debug)]
pub struct RemindersArgs {}

pub async fn vendors(_args: VendorsArgs, api: &str) -> Result<()> {
    run(Resource::Vendors, api).await
}

pub async fn notifications(_args: NotificationsArgs, api: &str) -> Result<()> {
    run(Resource::Notifications, api).await
}

pub async fn catalog(_args: CatalogArgs, api: &str) -> Result<()> {
    run(Resource::Catalog, api).await
}

pub async fn reminders(_args: RemindersArgs, api: &str) -> Result<()> {
    run(Resource::Reminders, api).await
}

enum Resource {
    Vendors,
    Notifications,
    Catalog,
    Reminders,
}

async fn run(resource: Resource, api: &str) -> Result<()> {
    let gate = AuthGate::new(context::session_store()?);

    // Deny before any protected output reaches the terminal.
    if gate.authorize().is_none() {
        bail!("No active session. Run 'fixadmin login' first.");
    }

    let admin = AdminApi::new(context::api_base(api)?);

    let value = match resource {
        Resource::Vendors => admin.vendors().await,
        Resource::Notifications => admin.notifications().await,
        Resource::Catalog => admin.services().await,
        Resource::Reminders => admin.reminders().await,
    }
    .context("Failed to fetch from admin API")?;

    output::json_pretty(&value)
}

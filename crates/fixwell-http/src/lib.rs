//! fixwell-http - HTTP clients for the fixwell admin console.

mod admin;
mod client;
mod identity;

pub use admin::AdminApi;
pub use client::ApiClient;
pub use identity::HttpIdentityService;

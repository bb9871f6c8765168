//! fixwell-store - Filesystem-backed session persistence.

mod file;

pub use file::FileSessionStore;

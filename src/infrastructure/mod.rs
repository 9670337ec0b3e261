//! Infrastructure layer - In-memory stores, configuration and logging

pub mod config;
pub mod credential_store;
pub mod entry_store;
pub mod logging;

pub use config::Config;
pub use credential_store::CredentialStore;
pub use entry_store::EntryStore;

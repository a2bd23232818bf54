//! Application persistence as seen by the launch pipeline.
//!
//! The real store lives outside this crate; [`MemoryStore`] backs tests and local runs.
mod error;
pub use error::StoreError;

mod memory;
pub use memory::MemoryStore;

use async_trait::async_trait;
use ferry_model::Application;

/// Access to persisted applications.
///
/// Implementations own the instance counter and must serialize [`ApplicationStore::next_instance`]
/// per application: two concurrent callers never observe the same ordinal.
#[async_trait]
pub trait ApplicationStore: Send + Sync + 'static {
    /// Fetch an application by id. `Ok(None)` when it does not exist.
    async fn fetch_application(&self, app_id: &str) -> Result<Option<Application>, StoreError>;

    /// Atomically return the current instance count and advance it by one.
    async fn next_instance(&self, app_id: &str) -> Result<u64, StoreError>;
}

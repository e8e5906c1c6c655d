use async_trait::async_trait;
use sharemeta_types::{Project, Thread};

use crate::error::Result;

/// Read-only access to thread records
///
/// `Ok(None)` means the record does not exist; `Err` means the lookup itself failed.
#[async_trait]
pub trait ThreadLookup: Send + Sync {
    async fn get_thread(&self, thread_id: &str) -> Result<Option<Thread>>;
}

/// Read-only access to project records
#[async_trait]
pub trait ProjectLookup: Send + Sync {
    async fn get_project(&self, project_id: &str) -> Result<Option<Project>>;
}

/// Convenience trait for sources that serve both lookups
pub trait UpstreamClient: ThreadLookup + ProjectLookup {}

impl<T: ThreadLookup + ProjectLookup + ?Sized> UpstreamClient for T {}

use async_trait::async_trait;
use sharemeta_types::{Project, Thread};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::{ProjectLookup, ThreadLookup};

/// Map-backed lookup source for local runs and tests
#[derive(Clone, Default)]
pub struct InMemoryUpstream {
    threads: Arc<RwLock<HashMap<String, Thread>>>,
    projects: Arc<RwLock<HashMap<String, Project>>>,
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_thread(&self, thread: Thread) {
        let mut threads = self.threads.write().await;
        threads.insert(thread.thread_id.clone(), thread);
    }

    pub async fn insert_project(&self, project: Project) {
        let mut projects = self.projects.write().await;
        projects.insert(project.project_id.clone(), project);
    }

    /// Seed both records at once
    pub async fn insert_shared(&self, thread: Thread, project: Project) {
        self.insert_project(project).await;
        self.insert_thread(thread).await;
    }
}

#[async_trait]
impl ThreadLookup for InMemoryUpstream {
    async fn get_thread(&self, thread_id: &str) -> Result<Option<Thread>> {
        Ok(self.threads.read().await.get(thread_id).cloned())
    }
}

#[async_trait]
impl ProjectLookup for InMemoryUpstream {
    async fn get_project(&self, project_id: &str) -> Result<Option<Project>> {
        Ok(self.projects.read().await.get(project_id).cloned())
    }
}

use futures::FutureExt;
use sharemeta_types::{MetadataDocument, Project, ResolveEnv, ShareBranding};
use sharemeta_upstream::{ProjectLookup, ThreadLookup, UpstreamClient};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::outcome::{FallbackReason, Resolution};
use crate::urls::ShareUrls;

/// Resolves share-page metadata for a thread id
///
/// Holds no per-call state; one instance is shared across requests.
#[derive(Clone)]
pub struct MetadataResolver {
    threads: Arc<dyn ThreadLookup>,
    projects: Arc<dyn ProjectLookup>,
    branding: ShareBranding,
}

impl MetadataResolver {
    /// Resolver backed by a single source serving both lookups
    pub fn new<U>(upstream: Arc<U>) -> Self
    where
        U: UpstreamClient + 'static,
    {
        Self {
            threads: upstream.clone(),
            projects: upstream,
            branding: ShareBranding::default(),
        }
    }

    pub fn with_lookups(threads: Arc<dyn ThreadLookup>, projects: Arc<dyn ProjectLookup>) -> Self {
        Self {
            threads,
            projects,
            branding: ShareBranding::default(),
        }
    }

    pub fn with_branding(mut self, branding: ShareBranding) -> Self {
        self.branding = branding;
        self
    }

    pub fn branding(&self) -> &ShareBranding {
        &self.branding
    }

    /// Generic document for `thread_id`; also the deadline result for callers
    /// that wrap `resolve` in a timeout.
    pub fn fallback(&self, thread_id: &str, env: &ResolveEnv) -> MetadataDocument {
        let urls = ShareUrls::new(&env.origin_url, &self.branding);
        MetadataDocument::new(
            self.branding.title.as_str(),
            self.branding.description.as_str(),
            urls.canonical(thread_id),
            urls.fallback_image(),
        )
    }

    /// Resolve metadata, returning the fallback document on any failure
    pub async fn resolve(&self, thread_id: &str, env: &ResolveEnv) -> MetadataDocument {
        self.resolve_detailed(thread_id, env).await.into_document()
    }

    /// Like [`resolve`](Self::resolve) but reports which tier was produced
    pub async fn resolve_detailed(&self, thread_id: &str, env: &ResolveEnv) -> Resolution {
        let fallback = self.fallback(thread_id, env);

        let outcome = AssertUnwindSafe(self.try_resolve(thread_id, env))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(FallbackReason::Upstream(panic_message(panic.as_ref()))));

        match outcome {
            Ok(document) => {
                tracing::debug!(thread_id = %thread_id, title = %document.title, "Resolved share metadata");
                Resolution::Full(document)
            }
            Err(reason) => {
                if reason.is_not_found() {
                    tracing::info!(thread_id = %thread_id, reason = %reason, "Using fallback share metadata");
                } else {
                    tracing::warn!(thread_id = %thread_id, reason = %reason, "Using fallback share metadata");
                }
                Resolution::Fallback {
                    document: fallback,
                    reason,
                }
            }
        }
    }

    async fn try_resolve(
        &self,
        thread_id: &str,
        env: &ResolveEnv,
    ) -> Result<MetadataDocument, FallbackReason> {
        let thread = self
            .threads
            .get_thread(thread_id)
            .await?
            .ok_or(FallbackReason::ThreadNotFound)?;

        let project = self
            .projects
            .get_project(&thread.project_id)
            .await?
            .ok_or_else(|| FallbackReason::ProjectNotFound(thread.project_id.clone()))?;

        Ok(self.assemble(thread_id, &project, env))
    }

    fn assemble(&self, thread_id: &str, project: &Project, env: &ResolveEnv) -> MetadataDocument {
        let urls = ShareUrls::new(&env.origin_url, &self.branding);

        let title = project.display_name().unwrap_or(&self.branding.title);
        let description = project
            .display_description()
            .unwrap_or(&self.branding.description);

        // Development runs skip the dynamic image endpoint
        let image = if env.is_development {
            urls.fallback_image()
        } else {
            urls.og_image(title)
        };

        MetadataDocument::new(title, description, urls.canonical(thread_id), image)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        format!("lookup panicked: {}", msg)
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        format!("lookup panicked: {}", msg)
    } else {
        "lookup panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharemeta_types::Thread;
    use sharemeta_upstream::InMemoryUpstream;

    #[tokio::test]
    async fn test_fallback_shape() {
        let resolver = MetadataResolver::new(Arc::new(InMemoryUpstream::new()));
        let env = ResolveEnv::production("https://suna.so");
        let doc = resolver.fallback("t1", &env);

        assert_eq!(doc.title, "Shared Conversation | Kortix Suna");
        assert_eq!(doc.description, "Replay this Agent conversation on Kortix Suna");
        assert_eq!(doc.canonical_url(), "https://suna.so/share/t1");
        assert_eq!(doc.image(), Some("https://suna.so/share-page/og-fallback.png"));
        assert!(doc.is_fully_populated());
    }

    #[tokio::test]
    async fn test_custom_branding_applies_to_fallback() {
        let branding = ShareBranding::new()
            .with_title("Shared chat")
            .with_fallback_image_path("/og.png");
        let resolver =
            MetadataResolver::new(Arc::new(InMemoryUpstream::new())).with_branding(branding);
        let doc = resolver.resolve("x", &ResolveEnv::production("http://localhost:3000")).await;

        assert_eq!(doc.title, "Shared chat");
        assert_eq!(doc.image(), Some("http://localhost:3000/og.png"));
    }

    #[tokio::test]
    async fn test_blank_project_name_uses_fallback_title_in_image() {
        let store = InMemoryUpstream::new();
        store
            .insert_shared(Thread::new("t5", "p5"), Project::new("p5").with_name("  "))
            .await;
        let resolver = MetadataResolver::new(Arc::new(store));
        let doc = resolver.resolve("t5", &ResolveEnv::production("https://suna.so")).await;

        assert_eq!(doc.title, "Shared Conversation | Kortix Suna");
        assert_eq!(
            doc.image(),
            Some("https://suna.so/api/share-page/og-image?title=Shared+Conversation+%7C+Kortix+Suna")
        );
    }
}

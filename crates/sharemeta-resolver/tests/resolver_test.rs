use async_trait::async_trait;
use sharemeta_resolver::{FallbackReason, MetadataResolver};
use sharemeta_types::{MetadataDocument, Project, ResolveEnv, Thread, TwitterCardKind};
use sharemeta_upstream::{InMemoryUpstream, ProjectLookup, ThreadLookup, UpstreamError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const ORIGIN: &str = "https://suna.so";
const FALLBACK_IMAGE: &str = "https://suna.so/share-page/og-fallback.png";

/// Thread lookup that always fails like a dropped connection
struct FailingThreads;

#[async_trait]
impl ThreadLookup for FailingThreads {
    async fn get_thread(&self, _thread_id: &str) -> sharemeta_upstream::Result<Option<Thread>> {
        Err(UpstreamError::Internal("connection reset".to_string()))
    }
}

/// Project lookup that counts calls and fails
#[derive(Default)]
struct CountingProjects {
    calls: AtomicUsize,
}

#[async_trait]
impl ProjectLookup for CountingProjects {
    async fn get_project(&self, _project_id: &str) -> sharemeta_upstream::Result<Option<Project>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(UpstreamError::Status {
            status: 503,
            url: "http://backend/projects/p1".to_string(),
        })
    }
}

struct PanickingProjects;

#[async_trait]
impl ProjectLookup for PanickingProjects {
    async fn get_project(&self, _project_id: &str) -> sharemeta_upstream::Result<Option<Project>> {
        panic!("record missing required column");
    }
}

async fn seeded_store() -> InMemoryUpstream {
    let store = InMemoryUpstream::new();
    store
        .insert_shared(
            Thread::new("t2", "p2"),
            Project::new("p2").with_name("Demo"),
        )
        .await;
    store
        .insert_shared(
            Thread::new("t3", "p3"),
            Project::new("p3")
                .with_name("Research agent")
                .with_description("Finds papers for you"),
        )
        .await;
    store.insert_thread(Thread::new("orphan", "gone")).await;
    store
}

fn assert_fallback(doc: &MetadataDocument, thread_id: &str) {
    assert_eq!(doc.title, "Shared Conversation | Kortix Suna");
    assert_eq!(doc.description, "Replay this Agent conversation on Kortix Suna");
    assert_eq!(doc.canonical_url(), format!("{}/share/{}", ORIGIN, thread_id));
    assert_eq!(doc.image(), Some(FALLBACK_IMAGE));
}

#[tokio::test]
async fn test_thread_not_found_returns_fallback() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));
    let env = ResolveEnv::production(ORIGIN);

    let resolution = resolver.resolve_detailed("nope", &env).await;

    assert!(resolution.is_fallback());
    assert_eq!(resolution.fallback_reason(), Some(&FallbackReason::ThreadNotFound));
    assert_eq!(resolution.document(), &resolver.fallback("nope", &env));
}

#[tokio::test]
async fn test_project_not_found_returns_fallback() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));
    let env = ResolveEnv::production(ORIGIN);

    let resolution = resolver.resolve_detailed("orphan", &env).await;

    assert_eq!(
        resolution.fallback_reason(),
        Some(&FallbackReason::ProjectNotFound("gone".to_string()))
    );
    assert_eq!(resolution.into_document(), resolver.fallback("orphan", &env));
}

#[tokio::test]
async fn test_thread_lookup_error_returns_fallback() {
    let projects = Arc::new(CountingProjects::default());
    let resolver = MetadataResolver::with_lookups(Arc::new(FailingThreads), projects.clone());
    let env = ResolveEnv::production(ORIGIN);

    let doc = resolver.resolve("t1", &env).await;

    assert_fallback(&doc, "t1");
    assert_eq!(doc.canonical_url(), "https://suna.so/share/t1");
    assert_eq!(projects.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_project_lookup_error_returns_fallback() {
    let store = Arc::new(seeded_store().await);
    let projects = Arc::new(CountingProjects::default());
    let resolver = MetadataResolver::with_lookups(store, projects.clone());

    let resolution = resolver.resolve_detailed("t2", &ResolveEnv::production(ORIGIN)).await;

    assert!(matches!(
        resolution.fallback_reason(),
        Some(FallbackReason::Upstream(msg)) if msg.contains("503")
    ));
    assert_fallback(resolution.document(), "t2");
    assert_eq!(projects.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_panicking_lookup_returns_fallback() {
    let store = Arc::new(seeded_store().await);
    let resolver = MetadataResolver::with_lookups(store, Arc::new(PanickingProjects));

    let resolution = resolver.resolve_detailed("t2", &ResolveEnv::production(ORIGIN)).await;

    assert!(matches!(
        resolution.fallback_reason(),
        Some(FallbackReason::Upstream(msg)) if msg.contains("required column")
    ));
    assert_fallback(resolution.document(), "t2");
}

#[tokio::test]
async fn test_production_uses_dynamic_image() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));

    let doc = resolver.resolve("t2", &ResolveEnv::production(ORIGIN)).await;

    assert_eq!(doc.title, "Demo");
    assert_eq!(doc.description, "Replay this Agent conversation on Kortix Suna");
    assert_eq!(doc.canonical_url(), "https://suna.so/share/t2");
    assert_eq!(
        doc.image(),
        Some("https://suna.so/api/share-page/og-image?title=Demo")
    );
    assert_eq!(doc.twitter.title, "Demo");
    assert_eq!(doc.twitter.images, doc.open_graph.images);
    assert_eq!(doc.twitter.card, TwitterCardKind::SummaryLargeImage);
}

#[tokio::test]
async fn test_development_uses_static_image() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));

    let doc = resolver.resolve("t3", &ResolveEnv::development(ORIGIN)).await;

    assert_eq!(doc.title, "Research agent");
    assert_eq!(doc.description, "Finds papers for you");
    assert_eq!(doc.image(), Some(FALLBACK_IMAGE));
    assert_eq!(doc.twitter.images, vec![FALLBACK_IMAGE.to_string()]);
}

#[tokio::test]
async fn test_canonical_matches_in_every_branch() {
    let store = Arc::new(seeded_store().await);
    let failing = MetadataResolver::with_lookups(Arc::new(FailingThreads), store.clone());
    let seeded = MetadataResolver::new(store);

    for env in [ResolveEnv::production(ORIGIN), ResolveEnv::development(ORIGIN)] {
        for id in ["t2", "t3", "orphan", "missing"] {
            let expected = format!("{}/share/{}", ORIGIN, id);
            assert_eq!(seeded.resolve(id, &env).await.canonical_url(), expected);
            assert_eq!(failing.resolve(id, &env).await.canonical_url(), expected);
        }
    }
}

#[tokio::test]
async fn test_documents_always_fully_populated() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));

    for env in [ResolveEnv::production(ORIGIN), ResolveEnv::development(ORIGIN)] {
        for id in ["t2", "t3", "orphan", "missing", "weird id/with?chars"] {
            let doc = resolver.resolve(id, &env).await;
            assert!(doc.is_fully_populated(), "document for {id} has empty fields");
        }
    }
}

#[tokio::test]
async fn test_origin_trailing_slash_is_ignored() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));

    let with_slash = resolver.resolve("t2", &ResolveEnv::production("https://suna.so/")).await;
    let without = resolver.resolve("t2", &ResolveEnv::production(ORIGIN)).await;

    assert_eq!(with_slash, without);
}

#[tokio::test]
async fn test_document_serializes_for_renderer() {
    let resolver = MetadataResolver::new(Arc::new(seeded_store().await));
    let doc = resolver.resolve("t2", &ResolveEnv::production(ORIGIN)).await;

    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["title"], "Demo");
    assert_eq!(json["alternates"]["canonical"], "https://suna.so/share/t2");
    assert_eq!(json["twitter"]["card"], "summary_large_image");
}

//! # Sharemeta
//!
//! Metadata resolution for publicly shared conversation pages.
//!
//! ## Overview
//!
//! Given an opaque thread id, Sharemeta produces the title, description,
//! canonical URL, preview image and social-card fields a server-rendered share
//! page needs. Resolution never fails: when the thread or its project cannot
//! be found, or the backend is unreachable, a generic document is returned.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sharemeta::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let upstream = HttpUpstreamClient::new("http://localhost:8000/api")?;
//!     let resolver = MetadataResolver::new(Arc::new(upstream));
//!
//!     let env = ResolveEnv::production("https://suna.so");
//!     let doc = resolver.resolve("thread-123", &env).await;
//!
//!     println!("{} -> {}", doc.title, doc.canonical_url());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`sharemeta-types`**: thread/project records and the metadata document
//! - **`sharemeta-upstream`**: lookup traits, HTTP and in-memory sources
//! - **`sharemeta-resolver`**: the resolver and its fallback outcomes
//!
//! The HTTP server lives in `sharemeta-api`.
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use sharemeta_types::{
    Alternates, MetadataDocument, OpenGraph, Project, ResolveEnv, ShareBranding, Thread,
    TwitterCard, TwitterCardKind,
};

pub use sharemeta_upstream::{
    HttpUpstreamClient, HttpUpstreamClientBuilder, InMemoryUpstream, ProjectLookup,
    ThreadLookup, UpstreamClient, UpstreamError,
};

pub use sharemeta_resolver::{FallbackReason, MetadataResolver, Resolution};

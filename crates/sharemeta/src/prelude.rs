//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use sharemeta::prelude::*;
//! ```

pub use crate::{
    HttpUpstreamClient, InMemoryUpstream, MetadataDocument, MetadataResolver, Project,
    ProjectLookup, ResolveEnv, Resolution, ShareBranding, Thread, ThreadLookup,
};

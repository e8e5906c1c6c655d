pub mod records;
pub mod document;
pub mod env;

pub use records::{Thread, Project};
pub use document::{MetadataDocument, Alternates, OpenGraph, TwitterCard, TwitterCardKind};
pub use env::{ResolveEnv, ShareBranding};
pub use env::{DEFAULT_TITLE, DEFAULT_DESCRIPTION, DEFAULT_FALLBACK_IMAGE_PATH, DEFAULT_OG_IMAGE_PATH, DEVELOPMENT_MODES};

//! Share-page metadata resolution.
//!
//! [`MetadataResolver`] turns an opaque thread id into a fully populated
//! [`MetadataDocument`](sharemeta_types::MetadataDocument). Lookup failures never
//! escape: the caller always receives either the project-derived document or
//! the generic fallback.

pub mod outcome;
pub mod resolver;
mod urls;

pub use outcome::{FallbackReason, Resolution};
pub use resolver::MetadataResolver;

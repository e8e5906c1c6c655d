pub mod error;
pub mod traits;
pub mod http;
pub mod memory;

pub use error::{UpstreamError, Result};
pub use traits::{ThreadLookup, ProjectLookup, UpstreamClient};
pub use http::{HttpUpstreamClient, HttpUpstreamClientBuilder};
pub use memory::InMemoryUpstream;

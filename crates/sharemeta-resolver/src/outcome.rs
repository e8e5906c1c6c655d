use sharemeta_types::MetadataDocument;
use sharemeta_upstream::UpstreamError;
use thiserror::Error;

/// Why a resolution produced the generic document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("thread not found")]
    ThreadNotFound,

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl FallbackReason {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ThreadNotFound | Self::ProjectNotFound(_))
    }
}

impl From<UpstreamError> for FallbackReason {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Result of a single resolution; both variants carry a complete document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Full(MetadataDocument),
    Fallback {
        document: MetadataDocument,
        reason: FallbackReason,
    },
}

impl Resolution {
    pub fn document(&self) -> &MetadataDocument {
        match self {
            Self::Full(document) | Self::Fallback { document, .. } => document,
        }
    }

    pub fn into_document(self) -> MetadataDocument {
        match self {
            Self::Full(document) | Self::Fallback { document, .. } => document,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Full(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

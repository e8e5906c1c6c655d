use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Shared Conversation | Kortix Suna";
pub const DEFAULT_DESCRIPTION: &str = "Replay this Agent conversation on Kortix Suna";
pub const DEFAULT_FALLBACK_IMAGE_PATH: &str = "/share-page/og-fallback.png";
pub const DEFAULT_OG_IMAGE_PATH: &str = "/api/share-page/og-image";

/// Env modes that must not hit the dynamic image endpoint
pub const DEVELOPMENT_MODES: [&str; 3] = ["local", "staging", "development"];

/// Execution environment a resolution runs under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveEnv {
    pub is_development: bool,
    /// Externally visible base URL, stored without a trailing slash
    pub origin_url: String,
}

impl ResolveEnv {
    pub fn new(origin_url: impl Into<String>, is_development: bool) -> Self {
        let origin_url = origin_url.into();
        Self {
            is_development,
            origin_url: origin_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn production(origin_url: impl Into<String>) -> Self {
        Self::new(origin_url, false)
    }

    pub fn development(origin_url: impl Into<String>) -> Self {
        Self::new(origin_url, true)
    }

    /// Development when `NODE_ENV` is `development` or the env mode is one of
    /// [`DEVELOPMENT_MODES`] (case-insensitive). Anything else is production.
    pub fn detect_development(env_mode: Option<&str>, node_env: Option<&str>) -> bool {
        let node_dev = node_env.is_some_and(|v| v.trim().eq_ignore_ascii_case("development"));
        let mode_dev = env_mode.is_some_and(|v| {
            let v = v.trim();
            DEVELOPMENT_MODES.iter().any(|mode| v.eq_ignore_ascii_case(mode))
        });
        node_dev || mode_dev
    }
}

/// Product strings and asset paths used when building documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareBranding {
    pub title: String,
    pub description: String,
    /// Static preview asset, relative to the origin
    pub fallback_image_path: String,
    /// Dynamic image endpoint, relative to the origin; receives `?title=`
    pub og_image_path: String,
}

impl Default for ShareBranding {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            fallback_image_path: DEFAULT_FALLBACK_IMAGE_PATH.to_string(),
            og_image_path: DEFAULT_OG_IMAGE_PATH.to_string(),
        }
    }
}

impl ShareBranding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fallback_image_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_image_path = normalize_path(path.into());
        self
    }

    pub fn with_og_image_path(mut self, path: impl Into<String>) -> Self {
        self.og_image_path = normalize_path(path.into());
        self
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

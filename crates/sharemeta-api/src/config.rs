use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use sharemeta_types::{
    ResolveEnv, ShareBranding, DEFAULT_DESCRIPTION, DEFAULT_FALLBACK_IMAGE_PATH,
    DEFAULT_OG_IMAGE_PATH, DEFAULT_TITLE,
};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets and process env (from ENV only)
    #[serde(default)]
    pub upstream_api_token: String,
    #[serde(default)]
    pub node_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Externally visible base URL for canonical and image links
    pub origin_url: String,
    pub title: String,
    pub description: String,
    pub fallback_image_path: String,
    pub og_image_path: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin_url: "http://localhost:3000".to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            fallback_image_path: DEFAULT_FALLBACK_IMAGE_PATH.to_string(),
            og_image_path: DEFAULT_OG_IMAGE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Backend API prefix that thread/project paths are appended to
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveConfig {
    /// Deadline for a whole resolution; the fallback document is served past it
    pub timeout_ms: u64,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self { timeout_ms: 8_000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub mode: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            mode: "local".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV_MODE}.toml (lowercased, if ENV_MODE is set)
    /// 3. `SHAREMETA_<SECTION>__<KEY>` environment variables
    /// 4. `ENV_MODE`, `NODE_ENV` and `UPSTREAM_API_TOKEN`
    pub fn load() -> Result<Self, ConfigError> {
        let env_mode = std::env::var("ENV_MODE").ok();

        let mut builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false));

        if let Some(mode) = &env_mode {
            builder = builder.add_source(
                File::with_name(&format!("config/{}", mode.to_lowercase())).required(false),
            );
        }

        let builder = builder.add_source(
            Environment::with_prefix("SHAREMETA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut cfg: Config = config.try_deserialize()?;

        if let Some(mode) = env_mode {
            cfg.environment.mode = mode;
        }
        cfg.node_env = std::env::var("NODE_ENV").ok();
        cfg.upstream_api_token = std::env::var("UPSTREAM_API_TOKEN").unwrap_or_default();

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        ResolveEnv::detect_development(Some(&self.environment.mode), self.node_env.as_deref())
    }

    pub fn resolve_env(&self) -> ResolveEnv {
        ResolveEnv::new(self.share.origin_url.clone(), self.is_development())
    }

    pub fn branding(&self) -> ShareBranding {
        ShareBranding::new()
            .with_title(self.share.title.clone())
            .with_description(self.share.description.clone())
            .with_fallback_image_path(self.share.fallback_image_path.clone())
            .with_og_image_path(self.share.og_image_path.clone())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream.timeout_ms)
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve.timeout_ms)
    }
}

use anyhow::{bail, Context};
use sharemeta_resolver::MetadataResolver;
use sharemeta_types::ResolveEnv;
use sharemeta_upstream::HttpUpstreamClient;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The resolver is stateless, so one instance serves every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<MetadataResolver>,
    pub env: ResolveEnv,
}

impl AppState {
    pub fn new(config: Config, resolver: MetadataResolver) -> Self {
        let env = config.resolve_env();
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            env,
        }
    }

    /// Build state with the HTTP backend client described by `config`
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        validate_origin(&config.share.origin_url)?;

        let upstream = HttpUpstreamClient::builder()
            .base_url(config.upstream.base_url.clone())
            .timeout(config.upstream_timeout())
            .api_token(config.upstream_api_token.clone())
            .build()
            .with_context(|| format!("invalid upstream.base_url '{}'", config.upstream.base_url))?;

        let resolver = MetadataResolver::new(Arc::new(upstream)).with_branding(config.branding());

        Ok(Self::new(config, resolver))
    }

    pub fn resolve_timeout(&self) -> Duration {
        self.config.resolve_timeout()
    }
}

fn validate_origin(origin: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(origin)
        .with_context(|| format!("invalid share.origin_url '{}'", origin))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("share.origin_url must be http or https, got '{}'", other),
    }
}

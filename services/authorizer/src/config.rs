use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8081";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9091";

// Authorizer configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct AuthorizerConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
}

#[derive(Debug, Deserialize)]
struct AuthorizerConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
}

impl AuthorizerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("TEXTURA_AUTHZ_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse TEXTURA_AUTHZ_BIND")?;
        let metrics_bind = std::env::var("TEXTURA_AUTHZ_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse TEXTURA_AUTHZ_METRICS_BIND")?;
        Ok(Self {
            bind_addr,
            metrics_bind,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("TEXTURA_AUTHZ_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read TEXTURA_AUTHZ_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: AuthorizerConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse authorizer config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        Ok(())
    }
}

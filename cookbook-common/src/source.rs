//! JSON sources
//!
//! Static JSON files are addressed by paths relative to a site origin
//! (`./json/budget-recipes.json`). The origin is either an HTTP base URL or a
//! local directory holding the same files.

use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Url;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

const USER_AGENT: &str = concat!("cookbook/", env!("CARGO_PKG_VERSION"));

/// Anything that can resolve a site-relative path to parsed JSON
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<Value>;
}

/// Where site-relative paths are resolved
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// Base URL, always ending in `/`
    Http(Url),
    /// Directory standing in for the site root
    Dir(PathBuf),
}

impl Origin {
    /// `http(s)://` strings become URL origins, everything else a directory
    pub fn parse(base: &str) -> Result<Self> {
        if is_http(base) {
            let with_slash = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{}/", base)
            };
            let url = Url::parse(&with_slash)
                .map_err(|e| Error::Config(format!("invalid base URL {}: {}", base, e)))?;
            Ok(Origin::Http(url))
        } else {
            Ok(Origin::Dir(PathBuf::from(base)))
        }
    }
}

fn is_http(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Production [`JsonSource`] over an [`Origin`]
pub struct SiteClient {
    origin: Origin,
    http_client: reqwest::Client,
}

impl SiteClient {
    pub fn new(origin: Origin) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            origin,
            http_client,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    async fn get_url(&self, url: Url) -> Result<Value> {
        debug!(url = %url, "Fetching JSON");

        let response = self
            .http_client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn read_file(&self, root: &std::path::Path, path: &str) -> Result<Value> {
        let relative = path.trim_start_matches("./").trim_start_matches('/');
        let file = root.join(relative);
        debug!(path = %file.display(), "Reading JSON");

        let text = tokio::fs::read_to_string(&file).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl JsonSource for SiteClient {
    async fn fetch_json(&self, path: &str) -> Result<Value> {
        if is_http(path) {
            let url = Url::parse(path)
                .map_err(|e| Error::InvalidInput(format!("invalid URL {}: {}", path, e)))?;
            return self.get_url(url).await;
        }

        match &self.origin {
            Origin::Http(base) => {
                let url = base
                    .join(path)
                    .map_err(|e| Error::InvalidInput(format!("invalid path {}: {}", path, e)))?;
                self.get_url(url).await
            }
            Origin::Dir(root) => self.read_file(root, path).await,
        }
    }
}

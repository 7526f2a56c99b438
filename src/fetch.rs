//! Page fetching through the CORS proxy.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::url_utils;

/// Source of raw page markup.
///
/// [`ProxyFetcher`] is the production implementation; tests script their own.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Raw markup of `target_url`.
    async fn fetch(&self, target_url: &str) -> Result<String>;
}

/// Fetches pages via `GET <proxy_base>?url=<target>`.
#[derive(Debug, Clone)]
pub struct ProxyFetcher {
    client: reqwest::Client,
    proxy_base: String,
}

impl ProxyFetcher {
    /// Build a fetcher from session options.
    pub fn new(options: &Options) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.request_timeout)
            .build()?;

        Ok(Self {
            client,
            proxy_base: options.proxy_base.clone(),
        })
    }
}

fn transport_error(e: reqwest::Error, target_url: &str) -> Error {
    if e.is_timeout() {
        Error::Timeout { url: target_url.to_string() }
    } else {
        Error::Request(e)
    }
}

#[async_trait]
impl PageFetcher for ProxyFetcher {
    async fn fetch(&self, target_url: &str) -> Result<String> {
        let request_url = url_utils::proxy_url(&self.proxy_base, target_url)?;
        debug!(%request_url, "proxy request");

        let resp = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| transport_error(e, target_url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::ProxyFetch {
                status: status.as_u16(),
                url: target_url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| transport_error(e, target_url))?;
        info!(url = target_url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

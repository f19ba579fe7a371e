use anyhow::{Context, bail};
use async_trait::async_trait;
use pkg_constants::api::{FIELD_SELECTOR_PARAM, PODS_PATH, RESOURCE_QUOTAS_PATH};
use pkg_constants::network::DEFAULT_REQUEST_TIMEOUT_SECS;
use pkg_report::source::{ClusterSource, PodSelector};
use pkg_types::pod::Pod;
use pkg_types::quota::ResourceQuota;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Read-only client for the cluster API.
pub struct ApiClient {
    http: reqwest::Client,
    server: String,
    token: Option<String>,
}

impl ApiClient {
    /// `server` is the API base address, e.g. `http://127.0.0.1:6443`.
    /// When `token` is set it is sent as a Bearer token.
    pub fn new(server: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            server: server.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        let raw = format!("{}{}", self.server, path);
        Url::parse(&raw).with_context(|| format!("invalid API address {}", raw))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        debug!("GET {}", url);
        let mut req = self.http.get(url.clone());
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let resp = req
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        if !resp.status().is_success() {
            bail!("server returned {} for {}", resp.status(), url.path());
        }

        resp.json()
            .await
            .with_context(|| format!("failed to decode response from {}", url.path()))
    }
}

#[async_trait]
impl ClusterSource for ApiClient {
    async fn list_pods(&self, selector: &PodSelector) -> anyhow::Result<Vec<Pod>> {
        let mut url = self.url(PODS_PATH)?;
        let field_selector = selector.field_selector();
        if !field_selector.is_empty() {
            url.query_pairs_mut()
                .append_pair(FIELD_SELECTOR_PARAM, &field_selector);
        }
        self.get_json(url).await
    }

    async fn list_quotas(&self) -> anyhow::Result<Vec<ResourceQuota>> {
        let url = self.url(RESOURCE_QUOTAS_PATH)?;
        self.get_json(url).await
    }
}

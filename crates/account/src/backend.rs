use aegis_primitives::{constants::backend, ChainConfig, ChainConfigResponse};
use async_trait::async_trait;
use tracing::trace;

/// A trait for fetching the chain configuration records of the backend node
/// service
#[async_trait]
pub trait ChainInfoOp: Send + Sync + 'static {
    /// Returns the configuration records of all supported chains
    ///
    /// # Returns
    /// * `Vec<ChainConfig>` - One record per supported chain
    async fn get_chain_info(&self) -> eyre::Result<Vec<ChainConfig>>;
}

/// HTTP client of the backend node service
#[derive(Clone, Debug)]
pub struct BackendClient {
    http_client: reqwest::Client,
    url: String,
}

impl BackendClient {
    pub fn new(url: &str) -> Self {
        Self { http_client: reqwest::Client::new(), url: url.trim_end_matches('/').into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChainInfoOp for BackendClient {
    async fn get_chain_info(&self) -> eyre::Result<Vec<ChainConfig>> {
        let url = format!("{}{}", self.url, backend::CHAINS_ROUTE);
        let res = self.http_client.get(&url).send().await?.error_for_status()?;
        let res: ChainConfigResponse = res.json().await?;

        trace!("backend returned {} chain configurations", res.data.len());

        if res.data.is_empty() {
            eyre::bail!("backend returned no chain configurations");
        }
        Ok(res.data)
    }
}

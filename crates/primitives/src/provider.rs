//! Utils for creating ethers providers

use ethers::{
    providers::{Http, Middleware, Provider},
    types::Chain,
};
use std::time::Duration;

/// Creates ethers provider with HTTP connection
pub async fn create_http_provider(addr: &str) -> eyre::Result<Provider<Http>> {
    let provider = Provider::<Http>::try_from(addr)?;

    let chain_id = provider.get_chainid().await?;

    Ok(provider.interval(if chain_id == Chain::Dev.into() {
        Duration::from_millis(5u64)
    } else {
        Duration::from_millis(500u64)
    }))
}

/// Creates one HTTP provider per RPC endpoint, in the given order
pub async fn create_http_providers(addrs: &[String]) -> eyre::Result<Vec<Provider<Http>>> {
    let mut providers = Vec::with_capacity(addrs.len());
    for addr in addrs {
        providers.push(create_http_provider(addr).await?);
    }
    Ok(providers)
}

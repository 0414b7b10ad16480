//! Etherscan REST client.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::{AppError, Result},
    types::ReceiptStatusResponse,
};

/// Trait for block explorer lookups.
///
/// Allows the query service to run against Etherscan or a test double.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Fetch the receipt status envelope for a transaction hash.
    ///
    /// The hash is passed through as given; validating it is left to the
    /// explorer, which reports bad hashes through the envelope.
    async fn tx_receipt_status(&self, tx_hash: &str) -> Result<ReceiptStatusResponse>;
}

/// Client for the Etherscan `transaction` module.
#[derive(Clone)]
pub struct EtherscanClient {
    /// HTTP client.
    client: reqwest::Client,
    /// API endpoint.
    api_url: String,
    /// API key sent with every request.
    api_key: String,
}

impl EtherscanClient {
    /// Create a new Etherscan client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, api_url: api_url.into(), api_key: api_key.into() })
    }
}

impl std::fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtherscanClient").field("api_url", &self.api_url).finish()
    }
}

#[async_trait]
impl ExplorerApi for EtherscanClient {
    async fn tx_receipt_status(&self, tx_hash: &str) -> Result<ReceiptStatusResponse> {
        tracing::debug!(tx_hash = %tx_hash, "Querying Etherscan receipt status");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("module", "transaction"),
                ("action", "gettxreceiptstatus"),
                ("txhash", tx_hash),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Explorer(format!(
                "Etherscan API returned status: {}",
                response.status()
            )));
        }

        Ok(response.json::<ReceiptStatusResponse>().await?)
    }
}

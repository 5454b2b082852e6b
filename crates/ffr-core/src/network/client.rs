use reqwest::Client;

use crate::config::http;
use crate::error::Result;
use crate::network::FetchBytes;

/// Shared HTTP client.
///
/// Cloning is cheap; clones reuse the same connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(http::TIMEOUT).build()?;
        Ok(Self { client })
    }
}

impl FetchBytes for HttpClient {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

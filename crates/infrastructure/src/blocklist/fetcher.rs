use super::parser::parse_feed;
use async_trait::async_trait;
use palisade_dns_application::ports::BlocklistFetcherPort;
use palisade_dns_domain::DomainError;
use std::collections::HashSet;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpBlocklistFetcher {
    client: reqwest::Client,
}

impl HttpBlocklistFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpBlocklistFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlocklistFetcherPort for HttpBlocklistFetcher {
    async fn fetch(&self, url: &str) -> Result<HashSet<String>, DomainError> {
        let response = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| DomainError::BlocklistFetchError(format!("{url}: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::BlocklistFetchError(format!(
                "{url}: HTTP {}",
                response.status().as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::BlocklistFetchError(format!("{url}: {e}")))?;

        Ok(parse_feed(&body))
    }
}

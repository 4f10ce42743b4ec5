use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shelf_shared::Book;

/// Where the pristine catalogue comes from.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Book>>;
}

/// Envelope returned by the faker books feed.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    code: u16,
    #[serde(default)]
    total: usize,
    data: Vec<Book>,
}

/// Seed fetched over HTTP from a faker-style `{status, code, total, data}` feed.
pub struct FakerSeed {
    client: Client,
    url: String,
}

impl FakerSeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SeedSource for FakerSeed {
    async fn fetch(&self) -> Result<Vec<Book>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to reach seed feed {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("unexpected status code: {}", status.as_u16()));
        }

        let feed: FeedResponse = response
            .json()
            .await
            .with_context(|| "failed to decode seed feed")?;

        tracing::info!(
            url = %self.url,
            status = %feed.status,
            code = feed.code,
            total = feed.total,
            books = feed.data.len(),
            "fetched seed catalogue"
        );
        Ok(feed.data)
    }
}

/// Seed that always yields the same books.
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    books: Vec<Book>,
}

impl StaticSeed {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }
}

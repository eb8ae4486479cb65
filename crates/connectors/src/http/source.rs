use crate::{error::SourceError, http::client::ApiClient};
use async_trait::async_trait;
use model::records::page::Page;

/// A source of fixed-size record pages addressed by offset.
///
/// Implementations must return the same slice for the same offset for the
/// duration of a run; the reassembly step relies on it.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, offset: usize) -> Result<Page, SourceError>;
}

/// `PageSource` backed by the remote HTTP records endpoint.
///
/// No retries here: a single failed request fails the whole run. Retry
/// policy, if one is ever wanted, belongs to the orchestration layer.
pub struct HttpDataSource {
    client: ApiClient,
    page_size: usize,
}

impl HttpDataSource {
    pub fn new(client: ApiClient, page_size: usize) -> Self {
        HttpDataSource { client, page_size }
    }
}

#[async_trait]
impl PageSource for HttpDataSource {
    async fn fetch_page(&self, offset: usize) -> Result<Page, SourceError> {
        let response = self.client.get_page(self.page_size, offset).await?;
        Ok(Page::from_response(offset, response))
    }
}

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shelf_shared::{Book, BookDraft, BookId};

use crate::error::{ClientError, Operation};

/// Remote catalogue operations the controller depends on.
#[async_trait]
pub trait BookApi: Send + Sync {
    async fn create(&self, draft: &BookDraft) -> Result<Book, ClientError>;
    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Book, ClientError>;
    async fn delete(&self, id: BookId) -> Result<(), ClientError>;
    async fn reset(&self) -> Result<(), ClientError>;
    async fn list(&self) -> Result<Vec<Book>, ClientError>;
}

/// `BookApi` over HTTP. No timeout and no retry: one request per call.
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: Client,
    base_url: String,
}

impl HttpBookApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn send(
    operation: Operation,
    request: reqwest::RequestBuilder,
) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Rejected {
            operation,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
) -> Result<T, ClientError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode { operation, source })
}

/// A created book must carry a server-assigned, positive identifier.
pub fn check_created(book: Book) -> Result<Book, ClientError> {
    if book.id.0 <= 0 {
        return Err(ClientError::UnexpectedBody {
            operation: Operation::Create,
            reason: format!("assigned id {} is not positive", book.id),
        });
    }
    Ok(book)
}

/// An updated book must be the one that was asked for.
pub fn check_updated(requested: BookId, book: Book) -> Result<Book, ClientError> {
    if book.id != requested {
        return Err(ClientError::UnexpectedBody {
            operation: Operation::Update,
            reason: format!("asked for book {} but got book {}", requested, book.id),
        });
    }
    Ok(book)
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn create(&self, draft: &BookDraft) -> Result<Book, ClientError> {
        let operation = Operation::Create;
        let request = self.client.post(self.url("/add")).json(draft);
        let book = decode(operation, send(operation, request).await?).await?;
        check_created(book)
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Book, ClientError> {
        let operation = Operation::Update;
        let request = self
            .client
            .put(self.url("/update"))
            .query(&[("id", id.0)])
            .json(draft);
        let book = decode(operation, send(operation, request).await?).await?;
        check_updated(id, book)
    }

    async fn delete(&self, id: BookId) -> Result<(), ClientError> {
        let request = self
            .client
            .delete(self.url("/delete"))
            .query(&[("id", id.0)]);
        send(Operation::Delete, request).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), ClientError> {
        send(Operation::Reset, self.client.post(self.url("/reset"))).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Book>, ClientError> {
        let operation = Operation::List;
        let response = send(operation, self.client.get(self.url("/books"))).await?;
        decode(operation, response).await
    }
}

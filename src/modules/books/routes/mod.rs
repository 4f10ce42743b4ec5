use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use shelf_db::{Catalog, SeedSource};
use shelf_http::error::AppError;
use shelf_shared::{Book, BookDraft, BookId};

use super::page;

/// Shared handler state
#[derive(Clone)]
pub struct BooksState {
    pub catalog: Arc<Catalog>,
    pub seed: Arc<dyn SeedSource>,
}

impl BooksState {
    async fn seeded(&self) -> Result<Vec<Book>, AppError> {
        self.catalog
            .ensure_seeded(self.seed.as_ref())
            .await
            .map_err(|err| AppError::Internal(err.into()))?;
        Ok(self.catalog.list().await)
    }
}

#[derive(Debug, Deserialize)]
pub struct IdParam {
    id: Option<String>,
}

impl IdParam {
    fn book_id(&self) -> Result<BookId, AppError> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| AppError::bad_request("Invalid book ID"))
    }
}

/// Routes for the Books module, mounted at the server root
pub fn router(state: BooksState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(page::SCRIPT_PATH, get(script))
        .route("/books", get(list_books))
        .route("/add", post(add_book))
        .route("/update", put(update_book))
        .route("/delete", axum::routing::delete(delete_book))
        .route("/reset", post(reset_books))
        .with_state(state)
}

fn decode_draft(payload: Result<Json<BookDraft>, JsonRejection>) -> Result<BookDraft, AppError> {
    payload
        .map(|Json(draft)| draft)
        .map_err(|rejection| {
            AppError::bad_request(format!("Invalid input: {}", rejection.body_text()))
        })
}

async fn index(State(state): State<BooksState>) -> Result<Html<String>, AppError> {
    let books = state.seeded().await?;
    Ok(Html(page::render_index(&books)))
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        page::SCRIPT,
    )
}

async fn list_books(State(state): State<BooksState>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(state.seeded().await?))
}

async fn add_book(
    State(state): State<BooksState>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let draft = decode_draft(payload)?;
    let book = state.catalog.add(draft).await;
    tracing::info!(book_id = %book.id, title = %book.title(), "book added");
    Ok(Json(book))
}

async fn update_book(
    State(state): State<BooksState>,
    Query(param): Query<IdParam>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let id = param.book_id()?;
    let draft = decode_draft(payload)?;

    match state.catalog.update(id, draft).await {
        Some(book) => {
            tracing::info!(book_id = %id, "book updated");
            Ok(Json(book))
        }
        None => Err(AppError::not_found("Book not found")),
    }
}

async fn delete_book(
    State(state): State<BooksState>,
    Query(param): Query<IdParam>,
) -> Result<StatusCode, AppError> {
    let id = param.book_id()?;

    if state.catalog.delete(id).await {
        tracing::info!(book_id = %id, "book deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Book not found"))
    }
}

async fn reset_books(State(state): State<BooksState>) -> StatusCode {
    state.catalog.reset().await;
    let books = state.catalog.len().await;
    tracing::info!(books, "catalogue reset");
    StatusCode::NO_CONTENT
}

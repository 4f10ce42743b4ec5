use shelf_shared::{Book, BookDraft, BookId};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::seed::SeedSource;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch books: {0:#}")]
    Seed(anyhow::Error),
}

#[derive(Debug, Default)]
struct Shelves {
    pristine: Vec<Book>,
    working: Vec<Book>,
}

impl Shelves {
    fn next_id(&self) -> BookId {
        let max = self.working.iter().map(|book| book.id.0).max().unwrap_or(0);
        BookId(max + 1)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.working.iter().position(|book| book.id == id)
    }
}

/// Book catalogue guarded by a single lock.
///
/// Every operation holds the lock for its whole duration, seeding included, so
/// concurrent handlers observe a linear history.
#[derive(Debug, Default)]
pub struct Catalog {
    shelves: Mutex<Shelves>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue whose pristine and working lists both start as `books`.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            shelves: Mutex::new(Shelves {
                pristine: books.clone(),
                working: books,
            }),
        }
    }

    /// Fetch the pristine list if it is empty, then refill an empty working
    /// list from it. A seed failure leaves both lists untouched.
    pub async fn ensure_seeded(&self, source: &dyn SeedSource) -> Result<(), CatalogError> {
        let mut shelves = self.shelves.lock().await;

        if shelves.pristine.is_empty() {
            let books = source.fetch().await.map_err(CatalogError::Seed)?;
            tracing::info!(books = books.len(), "catalogue seeded");
            shelves.pristine = books;
        }

        if shelves.working.is_empty() {
            shelves.working = shelves.pristine.clone();
        }

        Ok(())
    }

    pub async fn list(&self) -> Vec<Book> {
        self.shelves.lock().await.working.clone()
    }

    pub async fn len(&self) -> usize {
        self.shelves.lock().await.working.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append a book under a fresh identifier.
    pub async fn add(&self, draft: BookDraft) -> Book {
        let mut shelves = self.shelves.lock().await;
        let book = draft.into_book(shelves.next_id());
        shelves.working.push(book.clone());
        book
    }

    /// Replace the fields of an existing book, keeping its identifier.
    pub async fn update(&self, id: BookId, draft: BookDraft) -> Option<Book> {
        let mut shelves = self.shelves.lock().await;
        let index = shelves.position(id)?;
        let book = draft.into_book(id);
        shelves.working[index] = book.clone();
        Some(book)
    }

    /// Returns true if the book existed and was removed.
    pub async fn delete(&self, id: BookId) -> bool {
        let mut shelves = self.shelves.lock().await;
        match shelves.position(id) {
            Some(index) => {
                shelves.working.remove(index);
                true
            }
            None => false,
        }
    }

    /// Restore the working list to the pristine copy.
    pub async fn reset(&self) {
        let mut shelves = self.shelves.lock().await;
        shelves.working = shelves.pristine.clone();
    }
}

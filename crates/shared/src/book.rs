use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server-assigned book identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

/// The client-supplied fields of a book.
///
/// Request body of create and update. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub isbn: String,
    /// Cover image URL
    pub image: String,
    /// Publication date as typed by the user
    pub published: String,
    pub publisher: String,
}

impl BookDraft {
    /// A draft may only replace a book when it carries a title.
    pub fn validate_for_edit(&self) -> Result<(), &'static str> {
        if self.title.is_empty() {
            return Err("title is required");
        }
        Ok(())
    }

    pub fn into_book(self, id: BookId) -> Book {
        Book { id, draft: self }
    }
}

/// A stored book: identifier plus its fields, flattened on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    pub draft: BookDraft,
}

impl Book {
    pub fn title(&self) -> &str {
        &self.draft.title
    }
}

//! Types and markup shared by the SHELF server and client.

pub mod book;
pub mod markup;

pub use book::{Book, BookDraft, BookId};

//! List-item markup for a book.
//!
//! Both the server page and the client list render items through this module,
//! so an item rendered after an edit is indistinguishable from one rendered by
//! a fresh page load.

use std::fmt::Write as _;

use crate::book::Book;

/// CSS class carried by every list item.
pub const ITEM_CLASS: &str = "book-item";
/// Class of the edit control inside an item.
pub const EDIT_CONTROL: &str = "edit-btn";
/// Class of the delete control inside an item.
pub const DELETE_CONTROL: &str = "delete-btn";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Inner markup of a list item: the eight fields followed by the controls.
pub fn item_contents(book: &Book) -> String {
    let d = &book.draft;
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        concat!(
            "<h3>{title}</h3>",
            "<p>Author: {author}</p>",
            "<p>Genre: {genre}</p>",
            "<p>{description}</p>",
            "<p>ISBN: {isbn}</p>",
            "<img src=\"{image}\" alt=\"{title}\">",
            "<p>Published: {published}</p>",
            "<p>Publisher: {publisher}</p>",
            "<div class=\"book-actions\">",
            "<button class=\"{edit}\">Edit</button>",
            "<button class=\"{delete}\">Delete</button>",
            "</div>",
        ),
        title = escape(&d.title),
        author = escape(&d.author),
        genre = escape(&d.genre),
        description = escape(&d.description),
        isbn = escape(&d.isbn),
        image = escape(&d.image),
        published = escape(&d.published),
        publisher = escape(&d.publisher),
        edit = EDIT_CONTROL,
        delete = DELETE_CONTROL,
    );
    html
}

/// Wrap already-rendered item contents in the keyed `li` element.
pub fn wrap_item(id: crate::BookId, contents: &str) -> String {
    format!("<li class=\"{ITEM_CLASS}\" data-id=\"{id}\">{contents}</li>")
}

/// Full `li` element for a book.
pub fn list_item(book: &Book) -> String {
    wrap_item(book.id, &item_contents(book))
}

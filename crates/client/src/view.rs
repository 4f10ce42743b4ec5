//! The rendered book list.
//!
//! Items are the only client-side record of a book: each keeps its `data-id`
//! and the markup it was last rendered with.

use shelf_shared::{markup, Book, BookId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: BookId,
    contents: String,
}

impl ListItem {
    fn render(book: &Book) -> Self {
        Self {
            id: book.id,
            contents: markup::item_contents(book),
        }
    }

    /// The item's `data-id`.
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Inner markup: fields and controls.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The complete `li` element.
    pub fn html(&self) -> String {
        markup::wrap_item(self.id, &self.contents)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookList {
    items: Vec<ListItem>,
}

impl BookList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: &Book) {
        self.items.push(ListItem::render(book));
    }

    /// Re-render the item keyed by `book.id`. Returns false when no such item
    /// is on the page.
    pub fn replace(&mut self, book: &Book) -> bool {
        match self.items.iter_mut().find(|item| item.id == book.id) {
            Some(item) => {
                item.contents = markup::item_contents(book);
                true
            }
            None => false,
        }
    }

    /// Remove the item keyed by `id`; returns false when it was not present.
    pub fn remove(&mut self, id: BookId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Markup of the whole list element.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<ul id=\"bookList\">");
        for item in &self.items {
            html.push_str(&item.html());
        }
        html.push_str("</ul>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_shared::BookDraft;

    fn book(id: i64, title: &str) -> Book {
        BookDraft {
            title: title.to_string(),
            ..BookDraft::default()
        }
        .into_book(BookId(id))
    }

    #[test]
    fn replace_only_touches_existing_item() {
        let mut list = BookList::new();
        list.append(&book(1, "Old"));
        list.append(&book(2, "Other"));

        assert!(list.replace(&book(1, "New")));
        assert!(list.get(BookId(1)).unwrap().contents().contains("<h3>New</h3>"));
        assert!(list.get(BookId(2)).unwrap().contents().contains("<h3>Other</h3>"));

        assert!(!list.replace(&book(7, "Ghost")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut list = BookList::new();
        for id in 1..=4 {
            list.append(&book(id, "t"));
        }
        assert!(list.remove(BookId(3)));
        assert!(!list.remove(BookId(3)));
        assert_eq!(list.ids(), vec![BookId(1), BookId(2), BookId(4)]);
    }

    #[test]
    fn html_wraps_items_in_list() {
        let mut list = BookList::new();
        list.append(&book(5, "Solo"));
        let html = list.to_html();
        assert!(html.starts_with("<ul id=\"bookList\"><li class=\"book-item\" data-id=\"5\">"));
        assert!(html.ends_with("</li></ul>"));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_html(), "<ul id=\"bookList\"></ul>");
    }
}

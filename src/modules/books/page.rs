//! Server-rendered book list page.

use shelf_shared::{markup, Book};

/// Path the page loads its controller script from.
pub const SCRIPT_PATH: &str = "/books.js";

/// Browser controller wiring the form, the reset control, and item actions.
pub const SCRIPT: &str = include_str!("assets/books.js");

const FIELDS: [(&str, &str); 8] = [
    ("title", "Title"),
    ("author", "Author"),
    ("genre", "Genre"),
    ("description", "Description"),
    ("isbn", "ISBN"),
    ("image", "Image URL"),
    ("published", "Published"),
    ("publisher", "Publisher"),
];

/// Render the full page: the create form, the reset control, and one list
/// item per book.
pub fn render_index(books: &[Book]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Books</title>\n",
    );
    html.push_str(&format!(
        "<script src=\"{SCRIPT_PATH}\" defer></script>\n</head>\n<body>\n<h1>Books</h1>\n\
         <form id=\"bookForm\">\n"
    ));

    for (id, label) in FIELDS {
        html.push_str(&format!(
            "<label for=\"{id}\">{label}</label><input type=\"text\" id=\"{id}\" name=\"{id}\">\n"
        ));
    }

    html.push_str(
        "<button type=\"submit\">Add Book</button>\n</form>\n\
         <button id=\"resetButton\">Reset</button>\n<ul id=\"bookList\">\n",
    );

    for book in books {
        html.push_str(&markup::list_item(book));
        html.push('\n');
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_shared::{BookDraft, BookId};

    #[test]
    fn page_has_one_item_per_book() {
        let books: Vec<Book> = (1..=3)
            .map(|id| {
                BookDraft {
                    title: format!("Volume {id}"),
                    ..BookDraft::default()
                }
                .into_book(BookId(id))
            })
            .collect();

        let html = render_index(&books);
        assert_eq!(html.matches("class=\"book-item\"").count(), 3);
        assert!(html.contains("data-id=\"2\""));
        assert!(html.contains("<h3>Volume 3</h3>"));
    }

    #[test]
    fn page_carries_form_and_reset_controls() {
        let html = render_index(&[]);
        assert!(html.contains("id=\"bookForm\""));
        assert!(html.contains("id=\"resetButton\""));
        assert!(html.contains("<ul id=\"bookList\">\n</ul>"));
        for (id, _) in FIELDS {
            assert!(html.contains(&format!("id=\"{id}\"")));
        }
    }

    #[test]
    fn page_loads_controller_script() {
        let html = render_index(&[]);
        assert!(html.contains("<script src=\"/books.js\" defer></script>"));

        for hook in ["bookForm", "resetButton", "bookList", "book-item"] {
            assert!(SCRIPT.contains(hook), "script never references {hook}");
        }
        assert!(SCRIPT.contains(markup::EDIT_CONTROL));
        assert!(SCRIPT.contains(markup::DELETE_CONTROL));
        for route in ["'/add'", "'/reset'", "`/update?id=${id}`", "`/delete?id=${id}`"] {
            assert!(SCRIPT.contains(route), "script never calls {route}");
        }
    }
}

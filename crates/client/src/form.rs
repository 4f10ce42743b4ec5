//! Create-form state.

use shelf_shared::BookDraft;

/// One input of the book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Genre,
    Description,
    Isbn,
    Image,
    Published,
    Publisher,
}

impl Field {
    /// Every field, in form and prompt order.
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Author,
        Field::Genre,
        Field::Description,
        Field::Isbn,
        Field::Image,
        Field::Published,
        Field::Publisher,
    ];

    /// JSON key and form input id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::Description => "description",
            Field::Isbn => "isbn",
            Field::Image => "image",
            Field::Published => "published",
            Field::Publisher => "publisher",
        }
    }

    /// Human label used when prompting for a replacement value.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::Description => "description",
            Field::Isbn => "ISBN",
            Field::Image => "image URL",
            Field::Published => "published date",
            Field::Publisher => "publisher",
        }
    }

    pub fn edit_prompt(self) -> String {
        format!("Enter new {}:", self.label())
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    fn slot(self, draft: &mut BookDraft) -> &mut String {
        match self {
            Field::Title => &mut draft.title,
            Field::Author => &mut draft.author,
            Field::Genre => &mut draft.genre,
            Field::Description => &mut draft.description,
            Field::Isbn => &mut draft.isbn,
            Field::Image => &mut draft.image,
            Field::Published => &mut draft.published,
            Field::Publisher => &mut draft.publisher,
        }
    }

    fn value(self, draft: &BookDraft) -> &str {
        match self {
            Field::Title => &draft.title,
            Field::Author => &draft.author,
            Field::Genre => &draft.genre,
            Field::Description => &draft.description,
            Field::Isbn => &draft.isbn,
            Field::Image => &draft.image,
            Field::Published => &draft.published,
            Field::Publisher => &draft.publisher,
        }
    }
}

/// Values currently typed into the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    values: BookDraft,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *field.slot(&mut self.values) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        field.value(&self.values)
    }

    /// Collect the eight values into a request body.
    pub fn draft(&self) -> BookDraft {
        self.values.clone()
    }

    pub fn clear(&mut self) {
        self.values = BookDraft::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Assign a value to a draft field outside of a form.
pub fn set_field(draft: &mut BookDraft, field: Field, value: impl Into<String>) {
    *field.slot(draft) = value.into();
}

//! Book list controller.
//!
//! Wires user actions (form submission, edit, delete, reset) to the catalogue
//! API and patches the rendered list only after the server confirms.

pub mod api;
pub mod controller;
pub mod error;
pub mod form;
pub mod prompt;
pub mod view;

pub use api::{BookApi, HttpBookApi};
pub use controller::{Action, BookListController, Outcome};
pub use error::{ClientError, Operation};
pub use form::{BookForm, Field};
pub use prompt::{LinePrompter, PageHost, Prompter, ReloadFlag};
pub use view::{BookList, ListItem};

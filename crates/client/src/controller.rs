use shelf_shared::{BookDraft, BookId};

use crate::{
    api::BookApi,
    error::ClientError,
    form::{set_field, BookForm, Field},
    prompt::{PageHost, Prompter},
    view::BookList,
};

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this book?";

/// Control inside a list item that the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl Action {
    /// Map a control's CSS class to its action.
    pub fn from_control(class: &str) -> Option<Action> {
        match class {
            shelf_shared::markup::EDIT_CONTROL => Some(Action::Edit),
            shelf_shared::markup::DELETE_CONTROL => Some(Action::Delete),
            _ => None,
        }
    }
}

/// What a completed operation did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(BookId),
    Updated(BookId),
    Deleted(BookId),
    Reset,
    Loaded(usize),
    /// The user backed out before any request was sent.
    Aborted,
}

/// Keeps a rendered book list consistent with the catalogue service.
///
/// Each operation is one request/response round trip. The list and the form
/// change only after the server reports success; on any failure the error is
/// logged and returned and nothing else changes.
pub struct BookListController<A, P, H> {
    api: A,
    prompter: P,
    host: H,
    form: BookForm,
    list: BookList,
}

impl<A, P, H> BookListController<A, P, H>
where
    A: BookApi,
    P: Prompter,
    H: PageHost,
{
    pub fn new(api: A, prompter: P, host: H) -> Self {
        Self {
            api,
            prompter,
            host,
            form: BookForm::new(),
            list: BookList::new(),
        }
    }

    pub fn list(&self) -> &BookList {
        &self.list
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Render the server's current catalogue, replacing whatever is shown.
    pub async fn load(&mut self) -> Result<Outcome, ClientError> {
        let books = self
            .api
            .list()
            .await
            .inspect_err(|err| log_failure("failed to load books", err))?;

        self.list.clear();
        for book in &books {
            self.list.append(book);
        }
        tracing::debug!(books = books.len(), "book list loaded");
        Ok(Outcome::Loaded(books.len()))
    }

    /// Submit the create form.
    pub async fn submit_form(&mut self) -> Result<Outcome, ClientError> {
        let draft = self.form.draft();
        let book = self
            .api
            .create(&draft)
            .await
            .inspect_err(|err| log_failure("failed to add book", err))?;

        self.list.append(&book);
        self.form.clear();
        tracing::info!(book_id = %book.id, title = %book.title(), "book added");
        Ok(Outcome::Created(book.id))
    }

    /// Ask the server to restore its seed, then clear and reload the page.
    pub async fn reset(&mut self) -> Result<Outcome, ClientError> {
        self.api
            .reset()
            .await
            .inspect_err(|err| log_failure("failed to reset books", err))?;

        self.list.clear();
        self.host.reload();
        tracing::info!("books reset");
        Ok(Outcome::Reset)
    }

    /// Prompt for replacement values and update the book.
    ///
    /// An empty or cancelled title aborts before any request is made; other
    /// cancelled prompts send an empty value.
    pub async fn edit(&mut self, id: BookId) -> Result<Outcome, ClientError> {
        let Some(draft) = self.prompt_for_draft() else {
            tracing::debug!(book_id = %id, "edit abandoned without a title");
            return Ok(Outcome::Aborted);
        };

        let book = self
            .api
            .update(id, &draft)
            .await
            .inspect_err(|err| log_failure("failed to update book", err))?;

        if !self.list.replace(&book) {
            tracing::debug!(book_id = %book.id, "updated book is not on the page");
        }
        tracing::info!(book_id = %book.id, "book updated");
        Ok(Outcome::Updated(book.id))
    }

    /// Confirm, then delete the book and its list item.
    pub async fn delete(&mut self, id: BookId) -> Result<Outcome, ClientError> {
        if !self.prompter.confirm(DELETE_CONFIRMATION) {
            return Ok(Outcome::Aborted);
        }

        self.api
            .delete(id)
            .await
            .inspect_err(|err| log_failure("failed to delete book", err))?;

        self.list.remove(id);
        tracing::info!(book_id = %id, "book deleted");
        Ok(Outcome::Deleted(id))
    }

    /// Dispatch a control activated inside the item keyed by `id`.
    pub async fn handle_action(
        &mut self,
        id: BookId,
        action: Action,
    ) -> Result<Outcome, ClientError> {
        if !self.list.contains(id) {
            tracing::debug!(book_id = %id, ?action, "action on a book that is not listed");
            return Ok(Outcome::Aborted);
        }

        match action {
            Action::Edit => self.edit(id).await,
            Action::Delete => self.delete(id).await,
        }
    }

    fn prompt_for_draft(&mut self) -> Option<BookDraft> {
        let mut draft = BookDraft::default();
        for field in Field::ALL {
            let value = self.prompter.prompt(&field.edit_prompt()).unwrap_or_default();
            set_field(&mut draft, field, value);
            if field == Field::Title && draft.validate_for_edit().is_err() {
                return None;
            }
        }
        Some(draft)
    }
}

fn log_failure(message: &'static str, err: &ClientError) {
    tracing::error!(operation = %err.operation(), error = %err, "{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use async_trait::async_trait;
    use shelf_shared::Book;
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(BookDraft),
        Update(BookId, BookDraft),
        Delete(BookId),
        Reset,
        List,
    }

    /// In-memory server double: answers like the catalogue or with `status`.
    #[derive(Clone, Default)]
    struct FakeApi {
        calls: Arc<Mutex<Vec<Call>>>,
        books: Arc<Mutex<Vec<Book>>>,
        fail_status: Option<u16>,
    }

    impl FakeApi {
        fn with_books(books: Vec<Book>) -> Self {
            Self {
                books: Arc::new(Mutex::new(books)),
                ..Self::default()
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_status: Some(status),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn answer(&self, operation: Operation, call: Call) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            match self.fail_status {
                Some(status) => Err(ClientError::Rejected { operation, status }),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl BookApi for FakeApi {
        async fn create(&self, draft: &BookDraft) -> Result<Book, ClientError> {
            self.answer(Operation::Create, Call::Create(draft.clone()))?;
            let mut books = self.books.lock().unwrap();
            let next = books.iter().map(|b| b.id.0).max().unwrap_or(0) + 1;
            let book = draft.clone().into_book(BookId(next));
            books.push(book.clone());
            Ok(book)
        }

        async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Book, ClientError> {
            self.answer(Operation::Update, Call::Update(id, draft.clone()))?;
            Ok(draft.clone().into_book(id))
        }

        async fn delete(&self, id: BookId) -> Result<(), ClientError> {
            self.answer(Operation::Delete, Call::Delete(id))
        }

        async fn reset(&self) -> Result<(), ClientError> {
            self.answer(Operation::Reset, Call::Reset)
        }

        async fn list(&self) -> Result<Vec<Book>, ClientError> {
            self.answer(Operation::List, Call::List)?;
            Ok(self.books.lock().unwrap().clone())
        }
    }

    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<Option<String>>,
        confirm: bool,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn answering(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                ..Self::default()
            }
        }

        fn confirming(confirm: bool) -> Self {
            Self {
                confirm,
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn prompt(&mut self, message: &str) -> Option<String> {
            self.asked.push(message.to_string());
            self.answers.pop_front().flatten()
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.confirm
        }
    }

    #[derive(Default)]
    struct CountingHost {
        reloads: usize,
    }

    impl PageHost for CountingHost {
        fn reload(&mut self) {
            self.reloads += 1;
        }
    }

    type TestController = BookListController<FakeApi, ScriptedPrompter, CountingHost>;

    fn book(id: i64, title: &str) -> Book {
        BookDraft {
            title: title.to_string(),
            author: "N. K. Jemisin".to_string(),
            ..BookDraft::default()
        }
        .into_book(BookId(id))
    }

    async fn loaded(api: FakeApi, prompter: ScriptedPrompter) -> TestController {
        let mut controller = BookListController::new(api, prompter, CountingHost::default());
        controller.load().await.expect("load");
        controller
    }

    fn fill_form(form: &mut BookForm) {
        form.set(Field::Title, "The Fifth Season");
        form.set(Field::Author, "N. K. Jemisin");
        form.set(Field::Genre, "Fantasy");
        form.set(Field::Description, "Broken Earth, book one");
        form.set(Field::Isbn, "9780316229296");
        form.set(Field::Image, "http://img/fifth.jpg");
        form.set(Field::Published, "2015-08-04");
        form.set(Field::Publisher, "Orbit");
    }

    #[tokio::test]
    async fn create_appends_exactly_one_item_and_clears_form() {
        let api = FakeApi::default();
        let mut controller = loaded(api.clone(), ScriptedPrompter::default()).await;
        fill_form(controller.form_mut());

        let outcome = controller.submit_form().await.expect("create");
        assert_eq!(outcome, Outcome::Created(BookId(1)));
        assert_eq!(controller.list().len(), 1);

        let item = controller.list().get(BookId(1)).expect("item");
        assert!(item.html().contains("data-id=\"1\""));
        assert!(item.contents().contains("<h3>The Fifth Season</h3>"));
        assert!(item.contents().contains("<p>Publisher: Orbit</p>"));
        assert!(controller.form().is_blank());

        match &api.calls()[1] {
            Call::Create(draft) => assert_eq!(draft.isbn, "9780316229296"),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_create_leaves_list_and_form() {
        let mut controller = BookListController::new(
            FakeApi::failing(500),
            ScriptedPrompter::default(),
            CountingHost::default(),
        );
        fill_form(controller.form_mut());

        let err = controller.submit_form().await.unwrap_err();
        assert!(err.is_rejection());
        assert!(controller.list().is_empty());
        assert_eq!(controller.form().get(Field::Title), "The Fifth Season");
    }

    #[tokio::test]
    async fn confirmed_delete_removes_only_that_item() {
        let api = FakeApi::with_books(vec![book(1, "a"), book(3, "b"), book(5, "c")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::confirming(true)).await;

        let outcome = controller.delete(BookId(3)).await.expect("delete");
        assert_eq!(outcome, Outcome::Deleted(BookId(3)));
        assert_eq!(controller.list().ids(), vec![BookId(1), BookId(5)]);
        assert_eq!(api.calls().last(), Some(&Call::Delete(BookId(3))));
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let api = FakeApi::with_books(vec![book(1, "a"), book(3, "b")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::confirming(false)).await;

        let outcome = controller.delete(BookId(3)).await.expect("no error");
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(controller.list().len(), 2);
        assert_eq!(api.calls(), vec![Call::List]);
        assert_eq!(
            controller.prompter_mut().asked,
            vec![DELETE_CONFIRMATION.to_string()]
        );
    }

    #[tokio::test]
    async fn edit_with_empty_title_sends_nothing() {
        for title in [None, Some("")] {
            let api = FakeApi::with_books(vec![book(2, "Stone Sky")]);
            let mut controller = loaded(api.clone(), ScriptedPrompter::answering(&[title])).await;

            let outcome = controller.edit(BookId(2)).await.expect("no error");
            assert_eq!(outcome, Outcome::Aborted);
            assert_eq!(api.calls(), vec![Call::List]);
            assert_eq!(controller.prompter_mut().asked.len(), 1);
            assert!(controller
                .list()
                .get(BookId(2))
                .unwrap()
                .contents()
                .contains("<h3>Stone Sky</h3>"));
        }
    }

    #[tokio::test]
    async fn whitespace_title_still_sends_update() {
        let api = FakeApi::with_books(vec![book(2, "Stone Sky")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::answering(&[Some("   ")])).await;

        let outcome = controller.edit(BookId(2)).await.expect("edit");
        assert_eq!(outcome, Outcome::Updated(BookId(2)));
        assert_eq!(controller.prompter_mut().asked.len(), 8);
        match api.calls().last() {
            Some(Call::Update(id, draft)) => {
                assert_eq!(*id, BookId(2));
                assert_eq!(draft.title, "   ");
                assert_eq!(draft.author, "");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn edit_prompts_every_field_and_replaces_item() {
        let api = FakeApi::with_books(vec![book(2, "Stone Sky"), book(4, "Obelisk Gate")]);
        let prompter = ScriptedPrompter::answering(&[
            Some("The Stone Sky"),
            Some("Jemisin"),
            None,
            Some("Book three"),
            Some("9780316229241"),
            Some("http://img/sky.jpg"),
            Some("2017-08-15"),
            Some("Orbit"),
        ]);
        let mut controller = loaded(api.clone(), prompter).await;

        let outcome = controller.edit(BookId(2)).await.expect("edit");
        assert_eq!(outcome, Outcome::Updated(BookId(2)));
        assert_eq!(controller.prompter_mut().asked.len(), 8);
        assert_eq!(controller.prompter_mut().asked[0], "Enter new title:");

        match api.calls().last() {
            Some(Call::Update(id, draft)) => {
                assert_eq!(*id, BookId(2));
                assert_eq!(draft.genre, "");
                assert_eq!(draft.published, "2017-08-15");
            }
            other => panic!("expected update, got {other:?}"),
        }

        let item = controller.list().get(BookId(2)).unwrap();
        assert!(item.contents().contains("<h3>The Stone Sky</h3>"));
        assert!(controller
            .list()
            .get(BookId(4))
            .unwrap()
            .contents()
            .contains("<h3>Obelisk Gate</h3>"));
    }

    #[tokio::test]
    async fn rejected_edit_keeps_old_rendering() {
        let mut api = FakeApi::with_books(vec![book(2, "Stone Sky")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::answering(&[Some("New")])).await;
        api.fail_status = Some(404);
        // The controller owns its own clone; swap in the failing one.
        controller.api = api;

        let err = controller.edit(BookId(2)).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected { status: 404, .. }));
        assert!(controller
            .list()
            .get(BookId(2))
            .unwrap()
            .contents()
            .contains("<h3>Stone Sky</h3>"));
    }

    #[tokio::test]
    async fn reset_clears_items_and_reloads() {
        let api = FakeApi::with_books(vec![book(1, "a"), book(2, "b")]);
        let mut controller = loaded(api, ScriptedPrompter::default()).await;

        let outcome = controller.reset().await.expect("reset");
        assert_eq!(outcome, Outcome::Reset);
        assert!(controller.list().is_empty());
        assert_eq!(controller.host_mut().reloads, 1);
    }

    #[tokio::test]
    async fn failed_reset_changes_nothing() {
        let mut api = FakeApi::with_books(vec![book(1, "a")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::default()).await;
        api.fail_status = Some(503);
        controller.api = api;

        assert!(controller.reset().await.is_err());
        assert_eq!(controller.list().len(), 1);
        assert_eq!(controller.host_mut().reloads, 0);
    }

    #[tokio::test]
    async fn actions_dispatch_only_for_listed_items() {
        let api = FakeApi::with_books(vec![book(1, "a")]);
        let mut controller = loaded(api.clone(), ScriptedPrompter::confirming(true)).await;

        let outcome = controller
            .handle_action(BookId(9), Action::Delete)
            .await
            .expect("ignored");
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(api.calls(), vec![Call::List]);

        let action = Action::from_control("delete-btn").expect("control");
        let outcome = controller.handle_action(BookId(1), action).await.expect("delete");
        assert_eq!(outcome, Outcome::Deleted(BookId(1)));
        assert!(Action::from_control("book-actions").is_none());
    }
}

//! Todo Workflows
//!
//! What happens after a submit, a delete click or a list refresh, expressed
//! without touching the DOM. The page state is reached through [`TodoPage`],
//! which the app context implements over its signals.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{TodoApi, Transport};
use crate::error::ApiError;
use crate::models::{file_list_json, NewTodo, Todo};

pub const CREATED_MESSAGE: &str = "Todo created successfully";
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

// ========================
// Messages
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A single status line shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "success-message",
            MessageKind::Error => "error-message",
        }
    }
}

// ========================
// Form
// ========================

/// Current contents of the create form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub time: String,
    /// Number of files picked in the images input
    pub image_count: usize,
}

impl FormFields {
    /// No local validation; empty fields are sent as empty strings.
    pub fn to_new_todo(&self) -> NewTodo {
        NewTodo {
            title: self.title.clone(),
            description: self.description.clone(),
            time: self.time.clone(),
            images: file_list_json(self.image_count),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// How the page should react to a finished create or delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: Message,
    pub clear_form: bool,
    pub refresh: bool,
}

impl Outcome {
    fn settle(result: Result<(), ApiError>, success_text: &str, clear_form: bool) -> Self {
        match result {
            Ok(()) => Self {
                message: Message::success(success_text),
                clear_form,
                refresh: true,
            },
            Err(err) => Self {
                message: Message::error(err.to_string()),
                clear_form: false,
                refresh: false,
            },
        }
    }

    /// Writes the outcome into the form state. Returns whether the list
    /// should be fetched again.
    pub fn apply(&self, fields: &mut FormFields, message: &mut Option<Message>) -> bool {
        if self.clear_form {
            fields.clear();
        }
        *message = Some(self.message.clone());
        self.refresh
    }
}

/// Page state the submit and delete workflows read and write
pub trait TodoPage {
    fn form_fields(&self) -> FormFields;

    /// Edit the form fields and the message slot together
    fn update_form(&self, f: impl FnOnce(&mut FormFields, &mut Option<Message>));

    /// Start a full list reload
    fn refresh(&self);
}

/// Clear the message, post the form, then apply the result to the page
pub async fn submit_todo<T: Transport, P: TodoPage>(api: &TodoApi<T>, page: &P) -> Outcome {
    page.update_form(|_, message| *message = None);
    let fields = page.form_fields();

    let result = api.create_todo(&fields.to_new_todo()).await;
    let outcome = Outcome::settle(result, CREATED_MESSAGE, true);
    finish(page, &outcome);
    outcome
}

pub async fn delete_todo<T: Transport, P: TodoPage>(api: &TodoApi<T>, page: &P, id: u32) -> Outcome {
    let result = api.delete_todo(id).await;
    let outcome = Outcome::settle(result, DELETED_MESSAGE, false);
    finish(page, &outcome);
    outcome
}

fn finish<P: TodoPage>(page: &P, outcome: &Outcome) {
    let mut refresh = false;
    page.update_form(|fields, message| refresh = outcome.apply(fields, message));
    if refresh {
        page.refresh();
    }
}

// ========================
// List
// ========================

/// Ticket taken when a refresh starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Orders list refreshes so a late, older result never replaces a newer one.
///
/// Every refresh takes a ticket before it sends its request. A result is
/// applied only if its ticket is greater than the last applied ticket.
#[derive(Debug, Default)]
pub struct RefreshGuard {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Claims the list for `ticket`; false when a newer result already landed
    pub fn accept(&self, ticket: RefreshTicket) -> bool {
        self.applied.fetch_max(ticket.0, Ordering::Relaxed) < ticket.0
    }

    /// Decide what to do with a finished list fetch
    pub fn settle(&self, ticket: RefreshTicket, result: Result<Vec<Todo>, ApiError>) -> Refresh {
        match result {
            Ok(todos) if self.accept(ticket) => Refresh::Loaded(todos),
            Ok(_) => Refresh::Superseded,
            Err(err) => Refresh::Failed(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    Loaded(Vec<Todo>),
    /// A newer refresh already rendered; drop this result
    Superseded,
    /// Logged only; the current list stays on screen
    Failed(ApiError),
}

/// Display fields of one list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time: String,
}

impl From<&Todo> for TodoRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone().unwrap_or_default(),
            description: todo.description.clone().unwrap_or_default(),
            time: todo.time.clone().unwrap_or_default(),
        }
    }
}

/// One row per todo, server order kept
pub fn rows(todos: &[Todo]) -> Vec<TodoRow> {
    todos.iter().map(TodoRow::from).collect()
}

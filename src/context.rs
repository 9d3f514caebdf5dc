//! Application Context
//!
//! Shared state provided via Leptos Context API. Replaces page-wide element
//! lookups: every component reaches the list, the form, the message slot and
//! the API client through this handle.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{BrowserFetch, TodoApi};
use crate::controller::{self, FormFields, Message, MessageKind, Outcome, Refresh, RefreshGuard, TodoPage};
use crate::models::Todo;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todos from the latest applied list fetch - read
    pub todos: ReadSignal<Vec<Todo>>,
    /// Todos from the latest applied list fetch - write
    set_todos: WriteSignal<Vec<Todo>>,
    /// Create form contents - read
    pub fields: ReadSignal<FormFields>,
    /// Create form contents - write
    set_fields: WriteSignal<FormFields>,
    /// Status line under the form - read
    pub message: ReadSignal<Option<Message>>,
    /// Status line under the form - write
    set_message: WriteSignal<Option<Message>>,
    /// The `images-input` element; its file list can only be reset through it
    pub images_input: NodeRef<html::Input>,
    api: StoredValue<TodoApi<BrowserFetch>>,
    refresh_guard: StoredValue<RefreshGuard>,
}

impl AppContext {
    pub fn new(api: TodoApi<BrowserFetch>) -> Self {
        let (todos, set_todos) = signal(Vec::<Todo>::new());
        let (fields, set_fields) = signal(FormFields::default());
        let (message, set_message) = signal::<Option<Message>>(None);
        Self {
            todos,
            set_todos,
            fields,
            set_fields,
            message,
            set_message,
            images_input: NodeRef::new(),
            api: StoredValue::new(api),
            refresh_guard: StoredValue::new(RefreshGuard::new()),
        }
    }

    pub fn api(&self) -> TodoApi<BrowserFetch> {
        self.api.get_value()
    }

    /// Edit the form as the user types
    pub fn edit_fields(&self, f: impl FnOnce(&mut FormFields)) {
        self.set_fields.update(f);
    }

    pub fn submit(&self) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = controller::submit_todo(&ctx.api(), &ctx).await;
            report("[TodoForm]", &outcome);
        });
    }

    pub fn delete(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            web_sys::console::log_1(&format!("[TodoEntry] Deleting todo {}", id).into());
            let outcome = controller::delete_todo(&ctx.api(), &ctx, id).await;
            report("[TodoEntry]", &outcome);
        });
    }
}

impl TodoPage for AppContext {
    fn form_fields(&self) -> FormFields {
        self.fields.get_untracked()
    }

    fn update_form(&self, f: impl FnOnce(&mut FormFields, &mut Option<Message>)) {
        let mut fields = self.fields.get_untracked();
        let mut message = self.message.get_untracked();
        f(&mut fields, &mut message);

        if fields.image_count == 0 {
            if let Some(input) = self.images_input.get_untracked() {
                input.set_value("");
            }
        }
        self.set_fields.set(fields);
        self.set_message.set(message);
    }

    /// Fetch the whole list and replace what is rendered
    fn refresh(&self) {
        let ctx = *self;
        let ticket = self.refresh_guard.with_value(RefreshGuard::issue);
        spawn_local(async move {
            let result = ctx.api().list_todos().await;
            match ctx.refresh_guard.with_value(|guard| guard.settle(ticket, result)) {
                Refresh::Loaded(todos) => {
                    web_sys::console::log_1(&format!("[TodoList] Loaded {} todos", todos.len()).into());
                    ctx.set_todos.set(todos);
                }
                Refresh::Superseded => {
                    web_sys::console::log_1(&"[TodoList] Dropped stale list response".into());
                }
                Refresh::Failed(e) => {
                    web_sys::console::error_1(&format!("[TodoList] Failed to load todos: {}", e).into());
                }
            }
        });
    }
}

fn report(prefix: &str, outcome: &Outcome) {
    if outcome.message.kind == MessageKind::Error {
        web_sys::console::error_1(&format!("{} Request failed: {}", prefix, outcome.message.text).into());
    }
}

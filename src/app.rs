//! Todo App
//!
//! Root component: create form above the todo list.

use leptos::prelude::*;

use crate::api::{BrowserFetch, TodoApi};
use crate::components::{TodoForm, TodoList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::TodoPage;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(TodoApi::new(ApiConfig::from_build_env(), BrowserFetch));

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <TodoForm />
            <TodoList />
        </main>
    }
}

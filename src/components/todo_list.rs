//! Todo List Component
//!
//! Rebuilds every entry whenever a new list lands; nothing is patched in place.

use leptos::prelude::*;

use crate::components::TodoEntry;
use crate::context::AppContext;
use crate::controller::rows;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul id="todo-list" class="todo-list">
            {move || {
                ctx.todos
                    .with(|todos| rows(todos))
                    .into_iter()
                    .map(|row| view! { <TodoEntry row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}

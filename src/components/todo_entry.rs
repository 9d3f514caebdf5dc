//! Todo Entry Component
//!
//! One `<li>` in the todo list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::TodoRow;

#[component]
pub fn TodoEntry(row: TodoRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = row.id;

    view! {
        <li class="todo-entry" data-id=id.to_string()>
            <h3>{row.title}</h3>
            <p>{row.description}</p>
            <p>{row.time}</p>
            // Delete button, bound to this entry's id
            <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
        </li>
    }
}

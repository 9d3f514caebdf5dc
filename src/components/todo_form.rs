//! Todo Form Component
//!
//! Create form: title, description, time and images.

use leptos::prelude::*;

use crate::components::MessageBanner;
use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let fields = ctx.fields;

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        web_sys::console::log_1(
            &format!("[TodoForm] Creating todo '{}'", fields.with_untracked(|f| f.title.clone())).into(),
        );
        ctx.submit();
    };

    let count_images = move |_: web_sys::Event| {
        let count = ctx
            .images_input
            .get_untracked()
            .and_then(|input| input.files())
            .map(|files| files.length() as usize)
            .unwrap_or(0);
        ctx.edit_fields(|f| f.image_count = count);
    };

    view! {
        <form id="create-todo-form" class="create-todo-form" on:submit=create_todo>
            <input
                id="title-input"
                type="text"
                placeholder="Title"
                prop:value=move || fields.with(|f| f.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.edit_fields(|f| f.title = value);
                }
            />
            <textarea
                id="description-input"
                placeholder="Description"
                prop:value=move || fields.with(|f| f.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.edit_fields(|f| f.description = value);
                }
            />
            <input
                id="time-input"
                type="datetime-local"
                prop:value=move || fields.with(|f| f.time.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.edit_fields(|f| f.time = value);
                }
            />
            <input
                id="images-input"
                type="file"
                accept="image/*"
                multiple=true
                node_ref={ctx.images_input}
                on:change=count_images
            />
            <button type="submit">"Create"</button>
            <MessageBanner />
        </form>
    }
}

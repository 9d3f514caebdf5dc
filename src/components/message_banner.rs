//! Message Banner Component
//!
//! The success/error paragraph at the bottom of the create form.

use leptos::prelude::*;

use crate::context::AppContext;

/// Renders the current message, if any. The slot holds one message, so a
/// new one always replaces the previous paragraph.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.message.get().map(|message| {
            let class = message.class();
            view! { <p class=class>{message.text}</p> }
        })
    }
}

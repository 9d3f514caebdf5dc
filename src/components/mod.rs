//! UI Components
//!
//! Leptos components for the create form and the todo list.

mod todo_form;
mod todo_list;
mod todo_entry;
mod message_banner;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_entry::TodoEntry;
pub use message_banner::MessageBanner;

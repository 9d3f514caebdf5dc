//! API Configuration
//!
//! Where the todo endpoints live. Defaults to the page's own origin.

/// Base URL baked in at build time, e.g. `TODO_API_BASE=http://localhost:5000`
const BUILD_API_BASE: Option<&str> = option_env!("TODO_API_BASE");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every request path; empty means same origin
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::default().with_base_url(BUILD_API_BASE.unwrap_or_default())
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// `GET`/`POST` target
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    /// `DELETE` target for a single todo
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

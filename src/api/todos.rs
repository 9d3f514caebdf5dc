//! Todo Endpoints
//!
//! `GET /todos`, `POST /todos`, `DELETE /todos/{id}`.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewTodo, Todo};

use super::{ApiRequest, Transport};

#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full collection in server order
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .transport
            .send(ApiRequest::get(self.config.todos_url()))
            .await?;
        let body = response.into_success()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Success body is ignored; any 2xx counts
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<(), ApiError> {
        let body = serde_json::to_string(todo)?;
        let response = self
            .transport
            .send(ApiRequest::post_json(self.config.todos_url(), body))
            .await?;
        response.into_success().map(|_| ())
    }

    pub async fn delete_todo(&self, id: u32) -> Result<(), ApiError> {
        let response = self
            .transport
            .send(ApiRequest::delete(self.config.todo_url(id)))
            .await?;
        response.into_success().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::models::file_list_json;
    use futures::executor::block_on;

    fn api(transport: MockTransport) -> TodoApi<MockTransport> {
        TodoApi::new(ApiConfig::default(), transport)
    }

    #[test]
    fn test_list_todos() {
        let api = api(MockTransport::new().respond(200, r#"[{"id":1,"title":"A","description":"d","time":"t"},{"id":2,"title":"B"}]"#));
        let todos = block_on(api.list_todos()).unwrap();
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "/todos");
        assert!(sent[0].body.is_none());
    }

    #[test]
    fn test_list_todos_bad_json() {
        let api = api(MockTransport::new().respond(200, "<html>oops</html>"));
        assert!(matches!(block_on(api.list_todos()), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_list_todos_server_error() {
        let api = api(MockTransport::new().respond(500, "boom"));
        assert_eq!(
            block_on(api.list_todos()),
            Err(ApiError::Server { status: 500, message: "boom".into() })
        );
    }

    #[test]
    fn test_create_todo_posts_json() {
        let api = api(MockTransport::new().respond(200, r#"{"message": "Todo created successfully"}"#));
        let todo = NewTodo {
            title: "t".into(),
            description: "d".into(),
            time: "12:00".into(),
            images: file_list_json(0),
        };
        block_on(api.create_todo(&todo)).unwrap();

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/todos");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "t");
        assert_eq!(body["time"], "12:00");
        assert_eq!(body["images"], serde_json::json!({}));
    }

    #[test]
    fn test_delete_todo_path() {
        let api = api(MockTransport::new().respond(204, ""));
        block_on(api.delete_todo(5)).unwrap();

        let sent = api.transport().sent();
        assert_eq!(sent, vec![ApiRequest::delete("/todos/5".into())]);
    }

    #[test]
    fn test_delete_todo_not_found() {
        let api = api(MockTransport::new().respond(404, "Todo not found"));
        let err = block_on(api.delete_todo(9)).unwrap_err();
        assert_eq!(err.to_string(), "Todo not found");
    }

    #[test]
    fn test_network_failure_passes_through() {
        let api = api(MockTransport::new().fail("Failed to fetch"));
        assert_eq!(
            block_on(api.delete_todo(1)),
            Err(ApiError::Network("Failed to fetch".into()))
        );
    }
}

//! Live adapter for the `TaskApi` port over HTTP.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{RequestFailed, Resource};
use crate::model::{NewTask, StatsEnvelope, StatsSnapshot, Task, TaskEnvelope, TaskList, TaskUpdate};
use crate::ports::task_api::{ApiFuture, TaskApi};

/// Task API client talking JSON to `<base>/tasks`.
pub struct LiveTaskApi {
    client: Client,
    base_url: String,
}

impl LiveTaskApi {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:8000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest` client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Sends `request` and keeps the response only when its status is a success.
async fn send(
    request: RequestBuilder,
    resource: Resource,
    id: Option<&str>,
) -> Result<Response, RequestFailed> {
    let response = request.send().await.map_err(|e| {
        tracing::warn!(%resource, error = %e, "task API unreachable");
        RequestFailed::new(resource, id, format!("transport error: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%resource, status = status.as_u16(), "task API returned an error status");
        return Err(RequestFailed::new(resource, id, format!("HTTP {}", status.as_u16())));
    }
    Ok(response)
}

/// Sends `request` and decodes a JSON body.
async fn fetch<T: DeserializeOwned>(
    request: RequestBuilder,
    resource: Resource,
    id: Option<&str>,
) -> Result<T, RequestFailed> {
    let response = send(request, resource, id).await?;
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(%resource, error = %e, "task API response did not decode");
        RequestFailed::new(resource, id, format!("malformed response: {e}"))
    })
}

impl TaskApi for LiveTaskApi {
    fn list_tasks(&self) -> ApiFuture<'_, TaskList> {
        Box::pin(async move {
            tracing::debug!("GET /tasks");
            fetch(self.client.get(self.url("/tasks")), Resource::Tasks, None).await
        })
    }

    fn get_stats(&self) -> ApiFuture<'_, StatsSnapshot> {
        Box::pin(async move {
            tracing::debug!("GET /tasks/stats");
            let envelope: StatsEnvelope =
                fetch(self.client.get(self.url("/tasks/stats")), Resource::Stats, None).await?;
            Ok(envelope.data)
        })
    }

    fn get_task(&self, id: &str) -> ApiFuture<'_, Task> {
        let id = id.to_owned();
        Box::pin(async move {
            tracing::debug!(%id, "GET /tasks/{{id}}");
            let request = self.client.get(self.url(&format!("/tasks/{id}")));
            let envelope: TaskEnvelope = fetch(request, Resource::Task, Some(&id)).await?;
            Ok(envelope.into_task())
        })
    }

    fn create_task(&self, task: &NewTask) -> ApiFuture<'_, Task> {
        let body = task.clone();
        Box::pin(async move {
            tracing::debug!("POST /tasks");
            let request = self.client.post(self.url("/tasks")).json(&body);
            let envelope: TaskEnvelope = fetch(request, Resource::TaskCreate, None).await?;
            Ok(envelope.into_task())
        })
    }

    fn update_task(&self, update: &TaskUpdate) -> ApiFuture<'_, Task> {
        let body = update.clone();
        Box::pin(async move {
            tracing::debug!(id = %body.id, status = %body.task_status, "PUT /tasks/{{id}}");
            let request = self.client.put(self.url(&format!("/tasks/{}", body.id))).json(&body);
            let envelope: TaskEnvelope =
                fetch(request, Resource::TaskUpdate, Some(&body.id)).await?;
            Ok(envelope.into_task())
        })
    }

    fn delete_task(&self, id: &str) -> ApiFuture<'_, ()> {
        let id = id.to_owned();
        Box::pin(async move {
            tracing::debug!(%id, "DELETE /tasks/{{id}}");
            let request = self.client.delete(self.url(&format!("/tasks/{id}")));
            // The acknowledgement body is not needed and may be empty.
            send(request, Resource::TaskDelete, Some(&id)).await.map(|_| ())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn task_json(id: &str, detail: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "task_detail": detail,
            "task_status": status,
            "created_at": "2025-01-01T12:00:00Z",
            "updated_at": "2025-01-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_tasks_parses_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "data": [task_json("1", "a", "pending"), task_json("2", "b", "completed")]
            })))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api/", server.uri()));
        let list = api.list_tasks().await.unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.data[1].task_status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn get_stats_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "by_status": { "completed": 1, "in_progress": 0, "pending": 2 },
                    "total": 3
                },
                "success": true
            })))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let stats = api.get_stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(&TaskStatus::Pending), 2);
    }

    #[tokio::test]
    async fn get_task_not_found_is_a_task_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let err = api.get_task("99").await.unwrap_err();
        assert_eq!(err.resource, Resource::Task);
        assert_eq!(err.id.as_deref(), Some("99"));
        assert_eq!(err.reason, "HTTP 404");
    }

    #[tokio::test]
    async fn get_task_accepts_wrapped_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": task_json("5", "wrapped", "in_progress") })),
            )
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let task = api.get_task("5").await.unwrap();
        assert_eq!(task.task_detail, "wrapped");
    }

    #[tokio::test]
    async fn create_task_posts_only_the_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "task_detail": "buy milk" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(task_json("1", "buy milk", "pending")))
            .expect(1)
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let created = api.create_task(&NewTask::new("buy milk")).await.unwrap();
        assert_eq!(created.id, "1");
        assert_eq!(created.task_status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn toggle_puts_next_status_with_same_detail() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/1"))
            .and(body_json(json!({
                "id": "1",
                "task_detail": "write report",
                "task_status": "completed"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(task_json("1", "write report", "completed")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let task: Task = serde_json::from_value(task_json("1", "write report", "in_progress")).unwrap();
        api.toggle_task_status(&task).await.unwrap();
    }

    #[tokio::test]
    async fn delete_ignores_empty_acknowledgement() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/3"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        api.delete_task("3").await.unwrap();
    }

    #[tokio::test]
    async fn delete_failure_carries_resource_and_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let err = api.delete_task("3").await.unwrap_err();
        assert_eq!(err.resource, Resource::TaskDelete);
        assert_eq!(err.id.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = LiveTaskApi::new(format!("{}/api", server.uri()));
        let err = api.list_tasks().await.unwrap_err();
        assert_eq!(err.resource, Resource::Tasks);
        assert!(err.reason.starts_with("malformed response"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_failure() {
        let api = LiveTaskApi::new("http://127.0.0.1:9/api");
        let err = api.get_stats().await.unwrap_err();
        assert_eq!(err.resource, Resource::Stats);
        assert!(err.reason.starts_with("transport error"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(LiveTaskApi::new("http://x/api///").base_url(), "http://x/api");
    }
}

// HTTP repository implementation against the remote supervisor API
use crate::application::supervisor_repository::SupervisorRepository;
use crate::domain::errors::{DirectoryError, NotifyError};
use crate::domain::notification::NotifyRequest;
use crate::domain::supervisor::Supervisor;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpSupervisorRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSupervisorRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn supervisors_url(&self) -> String {
        format!("{}/supervisors", self.base_url)
    }

    fn notify_url(&self) -> String {
        format!("{}/supervisors/notify", self.base_url)
    }
}

#[async_trait]
impl SupervisorRepository for HttpSupervisorRepository {
    async fn list_supervisors(&self) -> Result<Vec<Supervisor>, DirectoryError> {
        let url = self.supervisors_url();
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|e| DirectoryError::Decode(e.to_string()))
    }

    async fn send_notification(&self, request: &NotifyRequest) -> Result<(), NotifyError> {
        let url = self.notify_url();
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        tracing::debug!("POST {} -> {}", url, response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    type Received = Arc<Mutex<Vec<serde_json::Value>>>;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn list_router(status: StatusCode, body: &'static str) -> Router {
        Router::new().route("/supervisors", get(move || async move { (status, body) }))
    }

    fn notify_router(status: StatusCode, received: Received) -> Router {
        Router::new()
            .route(
                "/supervisors/notify",
                post(
                    move |State(received): State<Received>, Json(body): Json<serde_json::Value>| async move {
                        received.lock().await.push(body);
                        status
                    },
                ),
            )
            .with_state(received)
    }

    #[tokio::test]
    async fn test_list_supervisors_in_response_order() {
        let body = r#"[
            {"id": 2, "firstName": "B", "lastName": "Two", "jurisdiction": "East", "phone": "2", "identificationNumber": "ID-2"},
            {"id": "1", "firstName": "A", "lastName": "One", "jurisdiction": "West", "phone": "1", "identificationNumber": "ID-1"}
        ]"#;
        let base_url = serve(list_router(StatusCode::OK, body)).await;

        let repository = HttpSupervisorRepository::new(format!("{}/", base_url));
        let supervisors = repository.list_supervisors().await.unwrap();

        let keys: Vec<&str> = supervisors
            .iter()
            .map(|s| s.identification_number.as_str())
            .collect();
        assert_eq!(keys, vec!["ID-2", "ID-1"]);
    }

    #[tokio::test]
    async fn test_list_supervisors_empty_array() {
        let base_url = serve(list_router(StatusCode::OK, "[]")).await;

        let supervisors = HttpSupervisorRepository::new(base_url)
            .list_supervisors()
            .await
            .unwrap();

        assert!(supervisors.is_empty());
    }

    #[tokio::test]
    async fn test_list_supervisors_non_success_status() {
        let base_url = serve(list_router(StatusCode::INTERNAL_SERVER_ERROR, "boom")).await;

        let err = HttpSupervisorRepository::new(base_url)
            .list_supervisors()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Status(500)));
        assert!(err.to_string().contains("Failed to fetch supervisors"));
    }

    #[tokio::test]
    async fn test_list_supervisors_malformed_body() {
        let base_url = serve(list_router(StatusCode::OK, r#"{"not": "an array"}"#)).await;

        let err = HttpSupervisorRepository::new(base_url)
            .list_supervisors()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_send_notification_posts_json_body() {
        let received: Received = Arc::default();
        let base_url = serve(notify_router(StatusCode::OK, received.clone())).await;

        let request = NotifyRequest::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "JaneDoe42@gmail.com".to_string(),
        );
        HttpSupervisorRepository::new(base_url)
            .send_notification(&request)
            .await
            .unwrap();

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "JaneDoe42@gmail.com"
            })
        );
    }

    #[tokio::test]
    async fn test_send_notification_any_status_is_success() {
        let received: Received = Arc::default();
        let base_url = serve(notify_router(StatusCode::INTERNAL_SERVER_ERROR, received.clone())).await;

        let request = NotifyRequest::new("A".into(), "B".into(), "AB1@gmail.com".into());
        let result = HttpSupervisorRepository::new(base_url)
            .send_notification(&request)
            .await;

        assert!(result.is_ok());
        assert_eq!(received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_api() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let repository = HttpSupervisorRepository::new(base_url);
        let request = NotifyRequest::new("A".into(), "B".into(), "AB1@gmail.com".into());

        assert!(matches!(
            repository.send_notification(&request).await,
            Err(NotifyError::Network(_))
        ));
        assert!(matches!(
            repository.list_supervisors().await,
            Err(DirectoryError::Transport(_))
        ));
    }
}

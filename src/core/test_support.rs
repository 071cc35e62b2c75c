//! In-process stand-in for the `/api/feeds` server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;

pub const EXAMPLE_PAYLOAD: &str = r#"[{"Host":"example.com","Favicon":"/f.ico","Items":[{"Title":"A","Description":"B","Link":"http://x"}]}]"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path_and_query: String,
    pub body_len: usize,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Vec<(StatusCode, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    delay: Duration,
}

pub struct MockFeedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: tokio::task::JoinHandle<()>,
}

impl MockFeedServer {
    /// Serves `replies` in order, repeating the last one once they run out.
    pub async fn start(replies: Vec<(StatusCode, &str)>) -> Self {
        Self::start_delayed(Duration::ZERO, replies).await
    }

    /// Like [`MockFeedServer::start`] but holds every reply back for `delay`.
    pub async fn start_delayed(delay: Duration, replies: Vec<(StatusCode, &str)>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            replies: Arc::new(
                replies
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            ),
            requests: requests.clone(),
            delay,
        };
        let app = Router::new().fallback(record_handler).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        Self {
            base_url: format!("http://{address}"),
            requests,
            task,
        }
    }

    pub async fn ok(body: &str) -> Self {
        Self::start(vec![(StatusCode::OK, body)]).await
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log lock").clone()
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let index = {
        let mut requests = state.requests.lock().expect("request log lock");
        requests.push(RecordedRequest {
            method,
            path_and_query: uri
                .path_and_query()
                .map(ToString::to_string)
                .unwrap_or_default(),
            body_len: body.len(),
        });
        requests.len() - 1
    };
    let (status, body) = state
        .replies
        .get(index)
        .or_else(|| state.replies.last())
        .cloned()
        .unwrap_or((StatusCode::OK, "[]".to_string()));
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

/// A base URL nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    drop(listener);
    format!("http://{address}")
}

//! Test harness for similarity API integration tests.
//!
//! Spawns a stub `/api/find-similar` server on an ephemeral port with axum.
//! Replies are canned, optionally keyed by the uploaded file name so tests
//! can control which of several overlapping requests finishes last.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use matcher_core::{ApiConfig, ImageKind, SelectedFile};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn matches(body: Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string(), delay: Duration::ZERO }
    }

    pub fn status(code: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status"),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self { status: StatusCode::OK, body: body.to_string(), delay: Duration::ZERO }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One multipart field as the stub server received it.
#[derive(Clone, Debug)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

struct StubState {
    default: Reply,
    by_file: HashMap<String, Reply>,
    hits: AtomicUsize,
    fields: Mutex<Vec<ReceivedField>>,
}

pub struct StubApi {
    pub endpoint: String,
    state: Arc<StubState>,
}

impl StubApi {
    pub async fn spawn(default: Reply) -> Self {
        Self::spawn_routed(default, Vec::new()).await
    }

    /// Like [`StubApi::spawn`], but uploads named in `routes` get their own reply.
    pub async fn spawn_routed(default: Reply, routes: Vec<(&str, Reply)>) -> Self {
        let state = Arc::new(StubState {
            default,
            by_file: routes.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            hits: AtomicUsize::new(0),
            fields: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/find-similar", post(find_similar))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server crashed");
        });

        StubApi { endpoint: format!("http://{addr}/api/find-similar"), state }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::with_endpoint(self.endpoint.clone())
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn fields(&self) -> Vec<ReceivedField> {
        self.state.fields.lock().unwrap().clone()
    }
}

async fn find_similar(State(stub): State<Arc<StubState>>, mut multipart: Multipart) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    let mut reply = stub.default.clone();
    while let Ok(Some(field)) = multipart.next_field().await {
        let received = ReceivedField {
            name: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
        };
        if let Some(r) = received.file_name.as_ref().and_then(|f| stub.by_file.get(f)) {
            reply = r.clone();
        }
        stub.fields.lock().unwrap().push(received);
    }

    tokio::time::sleep(reply.delay).await;
    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// A single product as the similarity API serializes it.
pub fn product_json(id: &str, score: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "category": "Women's Handbags",
        "image_url": format!("https://cdn.example.com/{id}.jpg"),
        "similarity_score": score,
    })
}

pub fn png(name: &str) -> SelectedFile {
    SelectedFile {
        file_name: name.to_string(),
        kind: ImageKind::Png,
        bytes: b"\x89PNG\r\n\x1a\n".to_vec(),
    }
}

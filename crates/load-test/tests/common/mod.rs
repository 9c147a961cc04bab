//! Shared test helpers: a recording HTTP server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body_len: usize,
}

#[derive(Clone)]
struct Recorder {
    seen: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
}

async fn record(
    State(recorder): State<Recorder>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> StatusCode {
    recorder.seen.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body_len: body.len(),
    });
    recorder.status
}

/// Starts a recording server answering every request with `status`.
pub async fn spawn_server(status: StatusCode) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(Recorder {
        seen: seen.clone(),
        status,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

pub fn take(seen: &Arc<Mutex<Vec<Recorded>>>) -> Vec<Recorded> {
    std::mem::take(&mut *seen.lock().unwrap())
}

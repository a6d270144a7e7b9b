//! Canned plan service for integration tests.

use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::{net::TcpListener, sync::mpsc, task::JoinHandle};

pub const PLAN_PATH: &str = "/api/plan/generate";

/// A request received by the canned service.
#[derive(Debug)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

/// Plan service on a loopback port answering `POST /api/plan/generate`.
///
/// Replies are used in order; once they run out every request gets an empty
/// 500.
pub struct CannedService {
    pub endpoint: String,
    requests: mpsc::UnboundedReceiver<CapturedRequest>,
    server: JoinHandle<()>,
}

impl CannedService {
    pub async fn start(replies: &[(u16, &str)]) -> Self {
        let replies: VecDeque<(StatusCode, String)> = replies
            .iter()
            .map(|(status, body)| {
                let status = StatusCode::from_u16(*status).expect("valid status code");
                (status, body.to_string())
            })
            .collect();
        let replies = Arc::new(Mutex::new(replies));
        let (tx, requests) = mpsc::unbounded_channel();

        let app = Router::new().route(
            PLAN_PATH,
            post(move |headers: HeaderMap, body: String| {
                let replies = Arc::clone(&replies);
                let tx = tx.clone();
                async move {
                    let content_type = headers
                        .get(CONTENT_TYPE)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    let _ = tx.send(CapturedRequest { content_type, body });

                    let (status, reply) = replies
                        .lock()
                        .expect("replies lock")
                        .pop_front()
                        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, String::new()));
                    (status, [(CONTENT_TYPE, "application/json")], reply)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind canned service");
        let addr: SocketAddr = listener.local_addr().expect("Failed to read address");
        let server = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app.into_make_service()).await {
                eprintln!("canned service error: {err}");
            }
        });

        Self {
            endpoint: format!("http://{addr}{PLAN_PATH}"),
            requests,
            server,
        }
    }

    /// Serve a single canned reply.
    pub async fn serve_once(status: u16, body: &str) -> Self {
        Self::start(&[(status, body)]).await
    }

    /// Waits for the next request the service receives.
    pub async fn next_request(&mut self) -> CapturedRequest {
        tokio::time::timeout(Duration::from_secs(5), self.requests.recv())
            .await
            .expect("service should be called")
            .expect("service stopped")
    }
}

impl Drop for CannedService {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// An endpoint on a loopback port nobody listens on.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind port");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);
    format!("http://{addr}{PLAN_PATH}")
}

//! Stub comic endpoint used by the test suites.
//!
//! Serves `/<id>/info.0.json` from an ephemeral local port: IDs `1..=max_id`
//! return a generated comic, IDs listed as malformed return a 200 with a body
//! that is not JSON, everything else is a 404.

use crate::config::{LimitMode, Settings};
use crate::source::types::Comic;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn sample_comic(id: i64) -> Comic {
    Comic {
        num: id,
        day: "1".to_string(),
        month: "1".to_string(),
        year: "2006".to_string(),
        transcript: format!("[[Panel {} of the stub strip.]]", id),
        img: format!("https://imgs.xkcd.com/comics/stub_{}.png", id),
        title: format!("Stub {}", id),
    }
}

pub struct StubEndpoint {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    server: tokio::task::JoinHandle<()>,
}

impl StubEndpoint {
    pub async fn serve(max_id: i64) -> Self {
        Self::serve_with(max_id, &[]).await
    }

    pub async fn serve_with(max_id: i64, malformed: &[i64]) -> Self {
        let malformed: Arc<HashSet<i64>> = Arc::new(malformed.iter().copied().collect());
        let hits = Arc::new(AtomicUsize::new(0));
        let hit_counter = hits.clone();

        let app = Router::new().route(
            "/:id/info.0.json",
            get(move |Path(id): Path<i64>| {
                let malformed = malformed.clone();
                let hits = hit_counter.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    comic_response(id, max_id, &malformed)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, hits, server }
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn settings(&self, workers: usize) -> Settings {
        Settings {
            endpoint: format!("http://{}/", self.addr),
            request_timeout: Duration::from_secs(5),
            workers,
            limit: LimitMode::Discover,
            ..Settings::default()
        }
    }
}

impl Drop for StubEndpoint {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn comic_response(id: i64, max_id: i64, malformed: &HashSet<i64>) -> Response {
    if malformed.contains(&id) {
        return (StatusCode::OK, "<html>not a comic</html>").into_response();
    }
    if id >= 1 && id <= max_id {
        return Json(sample_comic(id)).into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}

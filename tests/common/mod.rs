// tests/common/mod.rs

#![allow(dead_code)] // Each integration test binary uses a different subset of these helpers.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const OWNER: &str = "acme";
pub const REPO: &str = "widgets";
pub const BRANCH: &str = "main";

/// Link to `path` in the mocked repository.
pub fn repo_link(path: &str) -> String {
    format!("https://github.com/{OWNER}/{REPO}/tree/{BRANCH}/{path}")
}

// Helper function to get the binary command
pub fn ghdir_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ghdir"))
}

/// One child of a mocked directory listing.
pub enum MockEntry {
    File(&'static str, &'static [u8]),
    Dir(&'static str),
    Other(&'static str, &'static str),
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, (StatusCode, Vec<u8>)>>,
    requests: Mutex<Vec<String>>,
}

/// A tiny stand-in for the GitHub contents API and raw file host.
///
/// Listings are served at `/repos/acme/widgets/contents/<path>`, file bodies at
/// `/raw/<path>`. Unknown paths answer 404. Every request URI is recorded.
pub struct MockGithub {
    base: String,
    state: Arc<MockState>,
}

impl MockGithub {
    /// Binds an ephemeral port and serves from a background thread.
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(serve)
            .with_state(state.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self { base, state }
    }

    /// The base URL to hand to `GHDIR_API_URL`.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Registers a listing for `path`, plus the raw bodies of its files.
    pub fn dir(&self, path: &str, entries: &[MockEntry]) -> &Self {
        let mut items = Vec::new();
        for entry in entries {
            let item = match entry {
                MockEntry::File(name, content) => {
                    let full = format!("{path}/{name}");
                    let download_url = format!("{}/raw/{}", self.base, full);
                    self.respond(&format!("/raw/{full}"), StatusCode::OK, content.to_vec());
                    json!({
                        "name": name, "path": full, "type": "file",
                        "download_url": download_url,
                        "url": format!("{}/repos/{OWNER}/{REPO}/contents/{full}?ref={BRANCH}", self.base),
                    })
                }
                MockEntry::Dir(name) => {
                    let full = format!("{path}/{name}");
                    json!({
                        "name": name, "path": full, "type": "dir", "download_url": null,
                        "url": format!("{}/repos/{OWNER}/{REPO}/contents/{full}?ref={BRANCH}", self.base),
                    })
                }
                MockEntry::Other(name, kind) => json!({
                    "name": name, "path": format!("{path}/{name}"), "type": kind, "download_url": null,
                }),
            };
            items.push(item);
        }
        let body = serde_json::to_vec(&items).unwrap();
        self.respond(&Self::listing_path(path), StatusCode::OK, body);
        self
    }

    /// Makes the listing of `path` answer with `status`.
    pub fn fail_dir(&self, path: &str, status: StatusCode) -> &Self {
        let body = json!({ "message": "mocked failure" }).to_string().into_bytes();
        self.respond(&Self::listing_path(path), status, body);
        self
    }

    /// Makes the raw download of `path` answer with `status`.
    pub fn fail_file(&self, path: &str, status: StatusCode) -> &Self {
        self.respond(&format!("/raw/{path}"), status, b"nope".to_vec());
        self
    }

    /// Every request URI (path and query) received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Whether any request hit `fragment`.
    pub fn was_requested(&self, fragment: &str) -> bool {
        self.requests().iter().any(|r| r.contains(fragment))
    }

    fn listing_path(path: &str) -> String {
        format!("/repos/{OWNER}/{REPO}/contents/{path}")
    }

    fn respond(&self, route: &str, status: StatusCode, body: Vec<u8>) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(route.to_string(), (status, body));
    }
}

async fn serve(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    state.requests.lock().unwrap().push(uri.to_string());
    let route = state.routes.lock().unwrap().get(uri.path()).cloned();
    match route {
        Some((status, body)) => (status, body).into_response(),
        None => (StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#).into_response(),
    }
}

/// The `src/utils` tree: `a.go` and `sub/b.go`.
pub const A_GO: &[u8] = b"package utils\n\nfunc A() {}\n\x00\xff";
pub const B_GO: &[u8] = b"package sub\n";

pub fn utils_server() -> MockGithub {
    let server = MockGithub::start();
    server
        .dir(
            "src/utils",
            &[MockEntry::File("a.go", A_GO), MockEntry::Dir("sub")],
        )
        .dir("src/utils/sub", &[MockEntry::File("b.go", B_GO)]);
    server
}

//! Local HTTP server for integration tests.

#![allow(dead_code)]

use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
}

/// Server answering every request through a routing closure.
///
/// Shut down and joined on drop.
pub struct TestServer {
    pub base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
    shutdown: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    /// Start a server; `route(method, path)` returns status and HTML body.
    pub fn spawn<F>(route: F) -> Self
    where
        F: Fn(&str, &str) -> (u16, String) + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let base_url = format!("http://{}", server.server_addr());

        let hits = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&hits);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(20)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let header = |name: &'static str| {
                request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv(name))
                    .map(|h| h.value.as_str().to_string())
            };
            let hit = Hit {
                method: request.method().to_string(),
                path: request.url().to_string(),
                user_agent: header("User-Agent"),
                accept_language: header("Accept-Language"),
            };
            recorded.lock().expect("hits lock").push(hit.clone());

            let (status, body) = route(hit.method.as_str(), hit.path.as_str());
            let content_type = tiny_http::Header::from_bytes(
                &b"Content-Type"[..],
                &b"text/html; charset=utf-8"[..],
            )
            .expect("build header");
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(content_type);
            let _ = request.respond(response);
        });

        Self {
            base_url,
            hits,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().expect("hits lock").clone()
    }

    /// Requests received for `path`.
    pub fn hits_for(&self, path: &str) -> usize {
        self.hits().iter().filter(|h| h.path == path).count()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

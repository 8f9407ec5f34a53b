//! Minimal HTTP/1.1 server serving fixed SVG bodies for integration tests.
//!
//! Counts GET requests per path and can delay every response, which keeps a
//! fetch in flight long enough for other placeholders to pile up behind it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
pub struct SvgServer {
    pub base_url: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl SvgServer {
    /// GET requests seen for `path` (e.g. "/icons/star.svg").
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Starts a server in a background thread serving `routes` (path -> body).
/// Unknown paths get 404. The server runs until the process exits.
pub fn start(routes: &[(&str, &str)], delay: Option<Duration>) -> SvgServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, String>> = Arc::new(
        routes
            .iter()
            .map(|(p, b)| (p.to_string(), b.to_string()))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(HashMap::new()));
    let server = SvgServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits: Arc::clone(&hits),
    };
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits);
            thread::spawn(move || handle(stream, &routes, &hits, delay));
        }
    });
    server
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, String>,
    hits: &Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;
    if let Some(d) = delay {
        thread::sleep(d);
    }
    let (status, body) = match routes.get(&path) {
        Some(body) => ("200 OK", body.as_str()),
        None => ("404 Not Found", ""),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

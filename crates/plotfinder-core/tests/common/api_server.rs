//! Minimal HTTP/1.1 server that answers GETs with canned MediaWiki API JSON.
//!
//! Each request target is matched against the routes in order; the first
//! route whose `contains` is a substring of the target answers. Unmatched
//! requests get 404. Every request target is recorded for assertions.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub contains: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(contains: &'static str, body: impl Into<String>) -> Self {
        Self {
            contains,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(contains: &'static str, status: u16) -> Self {
        Self {
            contains,
            status,
            body: "{}".to_string(),
        }
    }
}

pub struct ApiServer {
    /// Full API endpoint, e.g. "http://127.0.0.1:12345/w/api.php".
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ApiServer {
    /// Request targets seen so far (path and query string).
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<Route>) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    ApiServer {
        endpoint: format!("http://127.0.0.1:{}/w/api.php", port),
        requests,
    }
}

/// An endpoint on a port nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/w/api.php", port)
}

fn handle(mut stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
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
    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let target = request_line.next().unwrap_or("").to_string();
    seen.lock().unwrap().push(target.clone());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let (status, body) = routes
        .iter()
        .find(|r| target.contains(r.contains))
        .map(|r| (r.status, r.body.as_str()))
        .unwrap_or((404, "{}"));
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

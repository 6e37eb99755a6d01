use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Canned response for one request path.
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub(crate) status: u16,
    pub(crate) body: String,
    pub(crate) delay: Duration,
}

impl Route {
    pub(crate) fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_owned(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request the server saw: path and `User-Agent` header.
#[derive(Debug, Clone)]
pub(crate) struct Hit {
    pub(crate) path: String,
    pub(crate) user_agent: Option<String>,
}

pub(crate) struct TestServer {
    pub(crate) base_url: String,
    hits: Arc<Mutex<Vec<Hit>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn hits(&self) -> Result<Vec<Hit>, String> {
        self.hits
            .lock()
            .map(|hits| hits.clone())
            .map_err(|err| format!("hits lock poisoned: {}", err))
    }

    pub(crate) fn paths(&self) -> Result<Vec<String>, String> {
        Ok(self.hits()?.into_iter().map(|hit| hit.path).collect())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP/1.1 server that answers from `routes` and 404s
/// everything else.
pub(crate) fn spawn_server(routes: Vec<(&str, Route)>) -> Result<TestServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_owned(), route))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let server_hits = Arc::clone(&hits);
    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let routes = Arc::clone(&routes);
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, &routes, &hits));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        hits,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

fn handle_client(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<Vec<Hit>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_owned();
    let user_agent = head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("user-agent")
            .then(|| value.trim().to_owned())
    });
    if let Ok(mut guard) = hits.lock() {
        guard.push(Hit {
            path: path.clone(),
            user_agent,
        });
    }

    let route = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Route::status(404));
    if !route.delay.is_zero() {
        thread::sleep(route.delay);
    }
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            break;
        }
        head.extend_from_slice(buffer.get(..read)?);
    }
    Some(String::from_utf8_lossy(&head).into_owned())
}

/// Builds a sitemap document with the protocol namespace on `urlset`.
pub(crate) fn sitemap_xml(locs: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for loc in locs {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(loc);
        xml.push_str("</loc>\n    <changefreq>weekly</changefreq>\n  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

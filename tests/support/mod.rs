//! 测试用的本地 HTTP 桩服务

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// 桩服务对单个请求的应答
#[derive(Debug, Clone)]
pub enum Reply {
    Json(u16, String),
    Delayed(Duration, u16),
    /// 应答后保持连接，继续在同一连接上服务
    KeepAlive(u16),
    /// 一直不应答
    Hang,
}

type Router = dyn Fn(&str) -> Reply + Send + Sync;

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    max_in_flight: Arc<AtomicUsize>,
}

impl StubServer {
    pub fn start<F>(router: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let router: Arc<Router> = Arc::new(router);

        {
            let requests = requests.clone();
            let max_in_flight = max_in_flight.clone();
            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { continue };
                    let router = router.clone();
                    let requests = requests.clone();
                    let in_flight = in_flight.clone();
                    let max_in_flight = max_in_flight.clone();
                    thread::spawn(move || {
                        handle(stream, router.as_ref(), &requests, &in_flight, &max_in_flight);
                    });
                }
            });
        }

        Self {
            addr,
            requests,
            max_in_flight,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// 收到的原始请求头
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

fn handle(
    mut stream: TcpStream,
    router: &Router,
    requests: &Mutex<Vec<String>>,
    in_flight: &AtomicUsize,
    max_in_flight: &AtomicUsize,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let end = loop {
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        };

        // 只处理无请求体的 GET，剩余字节属于下一个请求
        let raw = String::from_utf8_lossy(&buf[..end]).to_string();
        buf.drain(..end);
        let path = raw.split_whitespace().nth(1).unwrap_or("/").to_string();
        requests.lock().unwrap().push(raw);

        // 计数覆盖收到请求到写出应答之前，客户端拿到应答时已经回落
        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        max_in_flight.fetch_max(now, Ordering::SeqCst);

        let (status, body, keep_alive) = match router(&path) {
            Reply::Json(status, body) => (status, body, false),
            Reply::Delayed(delay, status) => {
                thread::sleep(delay);
                (status, String::new(), false)
            }
            Reply::KeepAlive(status) => (status, String::new(), true),
            Reply::Hang => {
                thread::sleep(Duration::from_secs(30));
                return;
            }
        };

        in_flight.fetch_sub(1, Ordering::SeqCst);
        let connection = if keep_alive { "keep-alive" } else { "close" };
        let response = format!(
            "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n{}",
            status,
            body.len(),
            connection,
            body
        );
        if stream.write_all(response.as_bytes()).is_err() || stream.flush().is_err() {
            return;
        }
        if !keep_alive {
            return;
        }
    }
}

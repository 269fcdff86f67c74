use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use tiny_http::{Header, Response, StatusCode};

/// In-process stand-in for the eligibility service. Paths without a canned
/// body get a 404.
pub struct MockService {
    pub base_url: String,
    pub seen: Arc<Mutex<Vec<String>>>,
    stop: Arc<AtomicBool>,
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

pub fn eligibility_body(
    address: &str,
    jupiter: Option<(bool, f64)>,
    pyth: Option<(bool, f64)>,
) -> String {
    let mut entries = vec![];

    if let Some((eligible, amount)) = jupiter {
        entries.push(serde_json::json!({
            "protocol": "jupiter",
            "protocolLabel": "Jupiter",
            "token": "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",
            "ticker": "JUP",
            "eligible": eligible,
            "amount": amount,
            "note": format!("jupiter note for {address}"),
        }));
    }

    if let Some((eligible, amount)) = pyth {
        entries.push(serde_json::json!({
            "protocol": "pyth",
            "protocolLabel": "Pyth Network",
            "token": "HZ1JovNiVvGrGNiiYvEozEVgZ58xaU3RKwX8eACQBCt3",
            "ticker": "PYTH",
            "eligible": eligible,
            "amount": amount,
            "note": format!("pyth note for {address}"),
        }));
    }

    serde_json::json!({
        "address": address,
        "eligibility": entries,
        "error": null,
    })
    .to_string()
}

pub fn start_mock_service(responses: HashMap<String, (u16, String)>) -> MockService {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tiny_http::Server::from_listener(listener, None).unwrap();
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let stop = Arc::new(AtomicBool::new(false));
    let seen_t = seen.clone();
    let stop_t = stop.clone();

    std::thread::spawn(move || {
        while !stop_t.load(Ordering::Relaxed) {
            let req = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(r)) => r,
                Ok(None) | Err(_) => continue,
            };

            let path = req.url().trim_start_matches('/').to_string();
            seen_t.lock().unwrap().push(format!("{} {path}", req.method()));

            let response = match responses.get(&path) {
                Some((status, body)) => Response::from_string(body.clone())
                    .with_status_code(StatusCode(*status))
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                    ),
                None => Response::from_string("not found").with_status_code(StatusCode(404)),
            };

            let _ = req.respond(response);
        }
    });

    MockService {
        base_url: format!("http://{addr}"),
        seen,
        stop,
    }
}

/// Mock that answers every request on its own thread after a per-path delay,
/// tracking how many requests are being served at once.
pub struct DelayedMockService {
    pub base_url: String,
    /// `start <path>` / `end <path>` in the order they happened.
    pub events: Arc<Mutex<Vec<String>>>,
    pub peak_in_flight: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
}

impl Drop for DelayedMockService {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

pub fn start_delayed_mock_service(
    responses: HashMap<String, (Duration, String)>,
) -> DelayedMockService {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tiny_http::Server::from_listener(listener, None).unwrap();
    let responses = Arc::new(responses);
    let events = Arc::new(Mutex::new(Vec::<String>::new()));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak_in_flight = Arc::new(AtomicUsize::new(0));
    let stop = Arc::new(AtomicBool::new(false));

    let events_t = events.clone();
    let peak_t = peak_in_flight.clone();
    let stop_t = stop.clone();

    std::thread::spawn(move || {
        while !stop_t.load(Ordering::Relaxed) {
            let req = match server.recv_timeout(Duration::from_millis(10)) {
                Ok(Some(r)) => r,
                Ok(None) | Err(_) => continue,
            };

            let responses = responses.clone();
            let events = events_t.clone();
            let in_flight = in_flight.clone();
            let peak = peak_t.clone();

            std::thread::spawn(move || {
                let path = req.url().trim_start_matches('/').to_string();

                events.lock().unwrap().push(format!("start {path}"));
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);

                let (delay, body) = responses
                    .get(&path)
                    .cloned()
                    .unwrap_or((Duration::ZERO, String::new()));
                std::thread::sleep(delay);

                in_flight.fetch_sub(1, Ordering::SeqCst);
                events.lock().unwrap().push(format!("end {path}"));

                let _ = req.respond(Response::from_string(body).with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                ));
            });
        }
    });

    DelayedMockService {
        base_url: format!("http://{addr}"),
        events,
        peak_in_flight,
        stop,
    }
}

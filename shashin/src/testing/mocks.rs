use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::controller::Navigator;
use crate::error::GeolocationError;
use crate::error::TransportError;
use crate::location::Geolocation;
use crate::model::Coordinate;
use crate::transport::HttpClient;
use crate::transport::HttpRequest;
use crate::transport::HttpResponse;

/// Answers every request with the same canned result and keeps what it was sent.
pub struct StubHttpClient {
    reply: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubHttpClient {
    pub fn new(reply: Result<HttpResponse, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::new(Ok(HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        }))
    }

    pub fn unreachable() -> Arc<Self> {
        Self::new(Err(TransportError::Connection("connection refused".to_string())))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpClient for StubHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// Holds the first request open until its [`Gate`] is opened.
pub struct GatedHttpClient {
    pending: Mutex<Option<oneshot::Receiver<Result<HttpResponse, TransportError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

pub struct Gate {
    sender: oneshot::Sender<Result<HttpResponse, TransportError>>,
}

impl Gate {
    pub fn open(self, reply: Result<HttpResponse, TransportError>) {
        let _ = self.sender.send(reply);
    }

    pub fn open_json(self, status: u16, body: serde_json::Value) {
        self.open(Ok(HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        }));
    }
}

impl GatedHttpClient {
    pub fn new() -> (Arc<Self>, Gate) {
        let (sender, receiver) = oneshot::channel();
        let client = Arc::new(Self {
            pending: Mutex::new(Some(receiver)),
            requests: Mutex::new(Vec::new()),
        });
        (client, Gate { sender })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpClient for GatedHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let receiver = self.pending.lock().unwrap().take();
        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(TransportError::Connection("gate dropped".to_string()))),
            None => Err(TransportError::Connection("gate already used".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    navigations: Mutex<Vec<(String, Duration)>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn navigations(&self) -> Vec<(String, Duration)> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_after(&self, target: &str, delay: Duration) {
        self.navigations.lock().unwrap().push((target.to_string(), delay));
    }
}

pub struct StaticGeolocation {
    reply: Result<Coordinate, GeolocationError>,
}

impl StaticGeolocation {
    pub fn new(reply: Result<Coordinate, GeolocationError>) -> Arc<Self> {
        Arc::new(Self { reply })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Geolocation for StaticGeolocation {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        self.reply.clone()
    }
}

/// Holds the first position lookup open until its [`GeolocationGate`] is opened.
pub struct GatedGeolocation {
    pending: Mutex<Option<oneshot::Receiver<Result<Coordinate, GeolocationError>>>>,
}

pub struct GeolocationGate {
    sender: oneshot::Sender<Result<Coordinate, GeolocationError>>,
}

impl GeolocationGate {
    pub fn open(self, reply: Result<Coordinate, GeolocationError>) {
        let _ = self.sender.send(reply);
    }
}

impl GatedGeolocation {
    pub fn new() -> (Arc<Self>, GeolocationGate) {
        let (sender, receiver) = oneshot::channel();
        let geolocation = Arc::new(Self {
            pending: Mutex::new(Some(receiver)),
        });
        (geolocation, GeolocationGate { sender })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Geolocation for GatedGeolocation {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        let receiver = self.pending.lock().unwrap().take();
        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(GeolocationError::Unavailable("gate dropped".to_string()))),
            None => Err(GeolocationError::Unavailable("gate already used".to_string())),
        }
    }
}

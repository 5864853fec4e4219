// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for nearscan integration tests
//!
//! Provides mock implementations of the upstream traits so estimator,
//! comparator and history logic can be tested without a NEAR node or any
//! HTTP feed, plus [`StubServer`] for exercising the real HTTP clients
//! against a local socket.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use nearscan::provider::NodeStatus;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use nearscan::{
    FeedError, FiatPriceSource, FiatPrices, GasPriceQuote, NearProvider, ReferenceGasSource,
    RpcError,
};

/// Mock NearProvider with a fixed gas price, or a fixed failure
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockNearProvider::new("mainnet").with_gas_price("100000000");
/// let estimator = GasEstimator::new(Arc::new(provider));
/// ```
pub struct MockNearProvider {
    network: String,
    gas_price: Option<String>,
    status: Option<NodeStatus>,
    calls: Mutex<usize>,
}

impl MockNearProvider {
    /// Create a provider that fails every call until configured
    pub fn new(network: &str) -> Self {
        Self {
            network: network.to_string(),
            gas_price: None,
            status: None,
            calls: Mutex::new(0),
        }
    }

    /// Answer `gas_price` with this yoctoNEAR-per-gas string
    pub fn with_gas_price(mut self, price: &str) -> Self {
        self.gas_price = Some(price.to_string());
        self
    }

    /// Answer `status` with this summary
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Number of RPC calls received so far
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) {
        *self.calls.lock().unwrap() += 1;
    }

    fn unavailable(method: &str) -> RpcError {
        RpcError::request_failed(method, std::io::Error::other("connection refused"))
    }
}

#[async_trait]
impl NearProvider for MockNearProvider {
    fn network(&self) -> &str {
        &self.network
    }

    async fn gas_price(&self) -> Result<GasPriceQuote, RpcError> {
        self.record_call();
        match &self.gas_price {
            Some(price) => Ok(GasPriceQuote::new(&self.network, price)),
            None => Err(Self::unavailable("gas_price")),
        }
    }

    async fn status(&self) -> Result<NodeStatus, RpcError> {
        self.record_call();
        self.status
            .clone()
            .ok_or_else(|| Self::unavailable("status"))
    }
}

/// Mock fiat feed returning fixed prices or a fixed HTTP status failure
pub struct MockFiatSource {
    prices: Result<Vec<(String, f64)>, u16>,
}

impl MockFiatSource {
    pub fn with_prices(prices: &[(&str, f64)]) -> Self {
        Self {
            prices: Ok(prices.iter().map(|(s, p)| (s.to_string(), *p)).collect()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            prices: Err(status),
        }
    }
}

#[async_trait]
impl FiatPriceSource for MockFiatSource {
    async fn usd_prices(&self, _symbols: &[String]) -> Result<FiatPrices, FeedError> {
        match &self.prices {
            Ok(entries) => {
                let mut prices = FiatPrices::default();
                for (symbol, usd) in entries {
                    prices.insert(symbol.as_str(), *usd);
                }
                Ok(prices)
            }
            Err(status) => Err(FeedError::BadStatus {
                endpoint: "mock-fiat",
                status: *status,
            }),
        }
    }
}

/// Mock reference gas oracle
pub struct MockReferenceGas {
    gwei: Option<f64>,
}

impl MockReferenceGas {
    pub fn with_gwei(gwei: f64) -> Self {
        Self { gwei: Some(gwei) }
    }

    pub fn failing() -> Self {
        Self { gwei: None }
    }
}

#[async_trait]
impl ReferenceGasSource for MockReferenceGas {
    async fn proposed_gas_price_gwei(&self) -> Result<f64, FeedError> {
        self.gwei
            .ok_or_else(|| FeedError::malformed("mock-oracle", "missing result.ProposeGasPrice"))
    }
}

/// Local HTTP/1.1 server answering every request with one canned response
///
/// Records the request target (path and query) of each request it receives.
pub struct StubServer {
    base_url: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Answer every request with `status` and a JSON `body`
    pub async fn respond(status: u16, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            reason(status),
            body.len(),
        );
        Self::spawn(Some(response)).await
    }

    /// Accept connections, read the request, and never answer
    pub async fn stalled() -> Self {
        Self::spawn(None).await
    }

    /// URL of a port nothing listens on
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request targets seen so far, in arrival order
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    async fn spawn(response: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let targets = Arc::new(Mutex::new(Vec::new()));

        let seen = targets.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let seen = seen.clone();
                let response = response.clone();
                tokio::spawn(async move {
                    serve(stream, seen, response).await;
                });
            }
        });

        Self { base_url, targets }
    }
}

async fn serve(mut stream: TcpStream, seen: Arc<Mutex<Vec<String>>>, response: Option<String>) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    if let Some(target) = head.split_whitespace().nth(1) {
        seen.lock().unwrap().push(target.to_string());
    }

    match response {
        Some(response) => {
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        None => {
            // Hold the connection open well past any client timeout
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for NEAR JSON-RPC clients.
//!
//! Records each call's method name and latency with `tracing`, and logs
//! transport failures (including timeouts) at `warn`.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

/// A Tower layer that adds logging/tracing to RPC requests.
///
/// # Example
///
/// ```rust,ignore
/// use nearscan::transport::LoggingLayer;
/// use alloy_rpc_client::ClientBuilder;
///
/// let client = ClientBuilder::default()
///     .layer(LoggingLayer::new())
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Whether to log full request and response payloads at `trace`
    log_payloads: bool,
}

impl LoggingLayer {
    /// Creates a new logging layer that records method, timing and errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log request and response payloads.
    ///
    /// `status` responses are large; keep this off outside debugging.
    pub fn verbose(mut self) -> Self {
        self.log_payloads = true;
        self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            log_payloads: self.log_payloads,
        }
    }
}

/// A Tower service that logs RPC requests and responses.
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    log_payloads: bool,
}

impl<S> tower::Service<RequestPacket> for LoggingService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let log_payloads = self.log_payloads;
        let method = method_name(&request);

        if log_payloads {
            trace!(request = ?request, "NEAR RPC request");
        }

        let span = tracing::debug_span!("nearscan.rpc_call", method = %method);
        let call = self.service.call(request);

        Box::pin(
            async move {
                let start = Instant::now();
                let result = call.await;
                let duration_ms = start.elapsed().as_millis() as u64;

                match &result {
                    Ok(response) if log_payloads => {
                        trace!(response = ?response, duration_ms, "NEAR RPC response");
                    }
                    Ok(_) => debug!(duration_ms, "NEAR RPC response: {method}"),
                    Err(e) => warn!(error = %e, duration_ms, "NEAR RPC error: {method}"),
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Extract the RPC method name from a request packet.
fn method_name(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => match reqs.as_slice() {
            [] => "batch(empty)".to_string(),
            [only] => only.method().to_string(),
            many => format!("batch({} calls)", many.len()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_layer_default() {
        let layer = LoggingLayer::new();
        assert!(!layer.log_payloads);
    }

    #[test]
    fn test_logging_layer_verbose() {
        let layer = LoggingLayer::new().verbose();
        assert!(layer.log_payloads);
    }
}

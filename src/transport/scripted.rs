//! Deterministic fetcher for tests and demos.
//!
//! Replies with a fixed result after a fixed delay measured on the tokio clock,
//! so it composes with a paused runtime.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::TransportError;
use crate::transport::{FetchFuture, FetchResponse, Fetcher};

#[derive(Debug, Clone)]
enum Reply {
    Response(FetchResponse),
    Failure(String),
    Never,
}

/// A fetcher whose reply and latency are fixed up front.
#[derive(Debug, Clone)]
pub struct ScriptedFetcher {
    reply: Reply,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    addresses: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    /// Reply with `(status, body)` after `delay`.
    pub fn respond(status: u16, body: impl Into<String>, delay: Duration) -> Self {
        Self::with_reply(Reply::Response(FetchResponse::new(status, body)), delay)
    }

    /// Fail at the transport level after `delay`.
    pub fn fail(message: impl Into<String>, delay: Duration) -> Self {
        Self::with_reply(Reply::Failure(message.into()), delay)
    }

    /// Never complete.
    pub fn hang() -> Self {
        Self::with_reply(Reply::Never, Duration::ZERO)
    }

    fn with_reply(reply: Reply, delay: Duration) -> Self {
        Self {
            reply,
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
            addresses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Addresses requested, in order.
    pub fn addresses(&self) -> Vec<String> {
        self.addresses.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, address: &str) -> FetchFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut addresses) = self.addresses.lock() {
            addresses.push(address.to_string());
        }

        let reply = self.reply.clone();
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            match reply {
                Reply::Response(response) => Ok(response),
                Reply::Failure(message) => Err(TransportError::Body(message)),
                Reply::Never => std::future::pending().await,
            }
        })
    }
}

//! Network transport seam.
//!
//! # Data Flow
//! ```text
//! FetchGuard::run(address)
//!     → Fetcher::fetch(address)      (single-resolution future)
//!     → Ok(FetchResponse { status, body }) | Err(TransportError)
//! ```
//!
//! # Design Decisions
//! - One GET, no body; headers and status text are not carried
//! - Dropping the returned future aborts the request
//! - No retries and no timeout here; the guard owns the deadline

pub mod address;
pub mod http;
pub mod scripted;

use futures_util::future::BoxFuture;
use serde::Serialize;

use crate::error::TransportError;

pub use address::preload_address;
pub use http::HttpFetcher;
pub use scripted::ScriptedFetcher;

/// Completion of a request: resolves exactly once.
pub type FetchFuture = BoxFuture<'static, Result<FetchResponse, TransportError>>;

/// Terminal value of a request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only a plain 200 counts; 201/204 and friends leave the output untouched.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues a non-blocking GET against a fully formed address.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, address: &str) -> FetchFuture;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_ok() {
        assert!(FetchResponse::new(200, "x").is_ok());
        assert!(!FetchResponse::new(204, "").is_ok());
        assert!(!FetchResponse::new(404, "").is_ok());
    }
}

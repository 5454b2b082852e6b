//! HTTP access to the remote chart service.
//!
//! - `FetchBytes` - the seam between the pipeline and the transport
//! - `HttpClient` - `reqwest`-backed implementation
//! - `fetch_with_retry`, `fetch_batched` - retrying, batch-bounded fetches

mod batch;
mod client;

pub use batch::*;
pub use client::*;

use std::future::Future;

use crate::error::Result;

/// Trait for retrieving a raw response body.
///
/// A non-success status code must be reported as an error so it takes part
/// in the retry policy.
pub trait FetchBytes {
    fn get_bytes(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>>;
}

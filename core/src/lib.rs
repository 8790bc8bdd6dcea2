//! Synchronous client for the short.io link-shortening API.
//!
//! # Overview
//! One operation: POST a `ShortenParams` to `/links/public` and get back a
//! `ShortenResult`, either the created link or a structured `ErrorModel`.
//!
//! # Design
//! - `ShortIoClient` is stateless. It holds a `ClientConfig` and a
//!   `Transport` (ureq by default).
//! - The operation is split into `build_shorten` (produces request) and
//!   `parse_shorten` (consumes response), so the I/O boundary is explicit and
//!   each half is testable without a network.
//! - API-level failures, including malformed payloads, come back as
//!   `ShortenResult::Error`. `ApiError` is reserved for exchanges that never
//!   produced a response.
//!
//! ```no_run
//! use shortio_core::{ShortIoClient, ShortenParams, ShortenResult};
//!
//! let client = ShortIoClient::new();
//! let params = ShortenParams {
//!     domain: Some("x.sh".to_string()),
//!     ttl: Some(3600i64.into()),
//!     ..ShortenParams::new("https://example.com")
//! };
//! match client.shorten("sk_live_...", &params)? {
//!     ShortenResult::Success(link) => println!("{:?}", link.short_url),
//!     ShortenResult::Error(err) => eprintln!("{err}"),
//! }
//! # Ok::<(), shortio_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ShortIoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
pub use types::{codes, ErrorModel, LinkRequest, LinkResponse, ShortenParams, ShortenResult, TimeValue};

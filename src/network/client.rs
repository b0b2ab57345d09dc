//! Blocking HTTP client
//!
//! Each call issues exactly one GET and waits for the reply. No retries, no
//! caching, and idle connections are not kept for reuse.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::catalog::Book;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::{decode_reply, request_url, Request};

/// Client for a remote catalog
pub struct Client {
    /// Server address (host:port)
    addr: String,

    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client for the server at `addr` with no request timeout
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        Self::build(addr.into(), None)
    }

    /// Create a client whose requests fail after `timeout`
    pub fn with_timeout(addr: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::build(addr.into(), Some(timeout))
    }

    /// Create a client from `listen_addr` and `client_timeout_ms`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(config.listen_addr.clone(), config.client_timeout())
    }

    fn build(addr: String, timeout: Option<Duration>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(timeout)
            .build()?;
        Ok(Self { addr, http })
    }

    pub fn get_all_books(&self) -> Result<Vec<Book>> {
        self.request(&Request::List)
    }

    pub fn get_book(&self, id: &str) -> Result<Book> {
        self.request(&Request::Find { id: id.to_string() })
    }

    pub fn get_copies(&self, id: &str) -> Result<u64> {
        self.request(&Request::GetCopies { id: id.to_string() })
    }

    /// Add copies, returning the new stock
    pub fn add_copies(&self, id: &str, copies: i64) -> Result<u64> {
        self.request(&Request::AddCopies {
            id: id.to_string(),
            copies,
        })
    }

    /// Remove copies, returning the new stock
    pub fn sub_copies(&self, id: &str, copies: i64) -> Result<u64> {
        self.request(&Request::SubCopies {
            id: id.to_string(),
            copies,
        })
    }

    /// Send `request` and decode the reply body as `T`
    pub fn request<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let url = request_url(&self.addr, request)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        let target = request
            .id()
            .unwrap_or_else(|| request.request_type().segment());
        decode_reply(status, &body, target)
    }

    /// Get the server address
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

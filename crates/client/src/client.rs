//! # API Client
//!
//! Type-safe HTTP client for the pizza billing backend.
//!
//! One `ApiClient` serves all three resource collections through the
//! [`Resource`] trait: `list`, `create`, `update` (full replace), and
//! `delete`, plus the per-pizza topping-name lookup.
//!
//! Every operation is stateless and fired at most once per user action:
//! no retry, no backoff, no idempotency key. No client-side timeout is
//! configured; the transport's default applies.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = ApiClient::new(&config);
//! let toppings = client.list::<Topping>().await?;
//! client.create(&Topping::new("T1", "Cheese", 1.5)).await?;
//! ```

use console_core::{ConsoleConfig, ConsoleError, ConsoleResult};
use console_model::Resource;
use tracing::debug;

use crate::decode;

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the billing backend
///
/// The base URL is injected at construction; there is no hardcoded host.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client
    client: reqwest::Client,
    /// Base URL of the backend, e.g. `http://localhost:8080`
    base_url: String,
}

impl ApiClient {
    /// Create a client from the console configuration
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_base_url(config.base_url())
    }

    /// Create a client pointing at a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ========================================================================
    // Collection operations
    // ========================================================================

    /// Fetch the full collection for a resource
    ///
    /// A transport failure or non-2xx status is a fetch error; the caller
    /// degrades to an empty list plus an inline message. A 2xx response
    /// whose body is not an array of the expected shape decodes to an
    /// empty collection without error.
    pub async fn list<R: Resource>(&self) -> ConsoleResult<Vec<R>> {
        let url = self.url(R::COLLECTION);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::fetch(R::NOUN_PLURAL, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::fetch(
                R::NOUN_PLURAL,
                format!("server returned status {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConsoleError::fetch(R::NOUN_PLURAL, e.to_string()))?;

        Ok(decode::collection(&body, R::NOUN_PLURAL))
    }

    /// Create a new entity
    ///
    /// Succeeds on any 2xx status. On failure nothing about the cached
    /// collection changes; the caller surfaces a retryable alert.
    pub async fn create<R: Resource>(&self, entity: &R) -> ConsoleResult<()> {
        let url = self.url(R::COLLECTION);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(entity)
            .send()
            .await
            .map_err(|e| ConsoleError::save(R::NOUN, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ConsoleError::save_status(R::NOUN, status.as_u16()))
        }
    }

    /// Replace an existing entity by identifier
    ///
    /// Full replace, no partial-field patch semantics. Same success and
    /// failure contract as [`create`](ApiClient::create).
    pub async fn update<R: Resource>(&self, id: &str, entity: &R) -> ConsoleResult<()> {
        let url = self.url(&format!("{}/{}", R::COLLECTION, id));
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(entity)
            .send()
            .await
            .map_err(|e| ConsoleError::save(R::NOUN, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ConsoleError::save_status(R::NOUN, status.as_u16()))
        }
    }

    /// Delete an entity by identifier
    ///
    /// Callers gate this behind an explicit confirmation that names the
    /// identifier. Succeeds on any 2xx status.
    pub async fn delete<R: Resource>(&self, id: &str) -> ConsoleResult<()> {
        let url = self.url(&format!("{}/{}", R::COLLECTION, id));
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::delete(R::NOUN, id, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ConsoleError::delete(
                R::NOUN,
                id,
                format!("server returned status {}", status.as_u16()),
            ))
        }
    }

    // ========================================================================
    // Sub-resource lookups
    // ========================================================================

    /// Fetch the topping names associated with one pizza type
    ///
    /// Same lenient body decoding as `list`. Callers treat a failure as an
    /// empty list for that pizza alone; it never blocks the other lookups.
    pub async fn pizza_toppings(&self, pizza_type_id: &str) -> ConsoleResult<Vec<String>> {
        let url = self.url(&format!("pizzas/{}/toppings", pizza_type_id));
        debug!("GET {}", url);

        let context = format!("toppings for pizza '{}'", pizza_type_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::fetch(context.clone(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::fetch(
                context,
                format!("server returned status {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConsoleError::fetch(context.clone(), e.to_string()))?;

        Ok(decode::collection(&body, &context))
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Remote users API: record types and the HTTP client that fetches them.
//!
//! The endpoint is expected to answer `GET` with a JSON array of user
//! objects. Only the fields shown on a card are kept; anything else the
//! server sends (company, geo, ...) is ignored.
pub mod loader;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LoadError;

pub use loader::{LoadOutcome, Loader};

/// Collection endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Postal address of a user. Only the city is displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
}

/// One user profile as received from the API.
///
/// `phone`, `website` and `address` fall back to empty values when the
/// server omits them so a sparse record still renders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
}

impl UserRecord {
    pub fn city(&self) -> &str {
        &self.address.city
    }
}

/// Parse a response body into user records.
pub fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, LoadError> {
    serde_json::from_slice(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// HTTP client bound to one users collection endpoint.
#[derive(Clone, Debug)]
pub struct UsersClient {
    http: Client,
    endpoint: String,
}

impl UsersClient {
    /// Create a client for `endpoint`. Only `http://` and `https://` URLs are accepted.
    ///
    /// No request timeout is configured; the transport's defaults apply.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LoadError> {
        let endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(LoadError::InvalidEndpoint("endpoint cannot be empty".into()));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(LoadError::InvalidEndpoint(format!(
                "{endpoint} must start with http:// or https://"
            )));
        }

        let http = Client::builder()
            .user_agent(format!("usercards/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the whole user collection. All-or-nothing: any failure yields no records.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, LoadError> {
        debug!(url = %self.endpoint, "fetching users");

        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_users(&body)
    }
}

//! API Configuration
//!
//! Requests go to the page's own origin; the dev-server proxy rule in
//! `Trunk.toml` is the only place the backend address is set.

/// Item endpoint, relative to the API base URL
pub const INSUMOS_PATH: &str = "/api/v1/insumos";
/// Recipe endpoint, relative to the API base URL
pub const RECEITAS_PATH: &str = "/api/v1/receitas";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL prepended to every endpoint. Empty means same origin.
    pub api_url: String,
}

impl ApiConfig {
    /// Full URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

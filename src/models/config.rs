//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the catalog console.
pub struct AppConfig {
    /// Base URL of the remote catalog service.
    pub api_base_url: String,
}

//! Server configuration.
//!
//! Every setting can come from a command-line flag or an environment variable.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CATALOG_HOST` | 0.0.0.0 | Host to bind |
//! | `CATALOG_PORT` | 3000 | Server port |
//! | `CATALOG_DATA_PATH` | static/data.json | Record file produced by ingestion |
//! | `CATALOG_LOG_LEVEL` | info | Log level when `RUST_LOG` is unset |
//! | `CATALOG_DEFAULT_PAGE_SIZE` | 20 | `per_page` when the client sends none |
//! | `CATALOG_MAX_PAGE_SIZE` | 1000 | Upper bound on `per_page` |
//! | `CATALOG_CORS_ORIGINS` | * | Allowed origins, comma-separated |
//! | `CATALOG_ENABLE_RELOAD` | false | Expose `POST /api/admin/reload` |

use clap::Parser;
use std::path::PathBuf;

use crate::filtering::PageLimits;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-server")]
#[command(about = "Read-only query service for a chemical compound catalog")]
pub struct ServerConfig {
    /// Host address to bind to.
    #[arg(long, env = "CATALOG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "CATALOG_PORT", default_value = "3000")]
    pub port: u16,

    /// JSON record file to serve.
    #[arg(long, env = "CATALOG_DATA_PATH", default_value = "static/data.json")]
    pub data_path: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Page size used when a request does not give one.
    #[arg(long, env = "CATALOG_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: usize,

    /// Largest page size a client may request.
    #[arg(long, env = "CATALOG_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: usize,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CATALOG_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Expose the reload endpoint.
    #[arg(long, env = "CATALOG_ENABLE_RELOAD", default_value = "false")]
    pub enable_reload: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_path: PathBuf::from("static/data.json"),
            log_level: "info".to_string(),
            default_page_size: 20,
            max_page_size: 1000,
            cors_origins: "*".to_string(),
            enable_reload: false,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pagination bounds. A zero default falls back to 20, and the maximum
    /// is never below the default.
    #[must_use]
    pub fn page_limits(&self) -> PageLimits {
        let default_per_page = if self.default_page_size == 0 {
            PageLimits::default().default_per_page
        } else {
            self.default_page_size
        };
        PageLimits {
            default_per_page,
            max_per_page: self.max_page_size.max(default_per_page),
        }
    }

    /// Origins listed in `cors_origins`, or `None` when every origin is allowed.
    #[must_use]
    pub fn cors_origin_list(&self) -> Option<Vec<String>> {
        if self.cors_origins.trim() == "*" {
            return None;
        }
        Some(
            self.cors_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:4000").
    pub bind_addr: String,

    /// SQLite connection URL for the snippet store.
    pub database_url: String,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// Site name shown in page titles and the navigation bar.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All values have defaults for local development:
    /// - `SNIPBOX_BIND_ADDR`: Server bind address (default: "127.0.0.1:4000")
    /// - `SNIPBOX_DATABASE_URL`: Store URL (default: "sqlite:snipbox.db?mode=rwc")
    /// - `SNIPBOX_STATIC_DIR`: Static asset root (default: "./ui/static")
    /// - `SNIPBOX_SITE_NAME`: Site name (default: "Snipbox")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SNIPBOX_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".to_string());

        let database_url = std::env::var("SNIPBOX_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:snipbox.db?mode=rwc".to_string());

        let static_dir =
            std::env::var("SNIPBOX_STATIC_DIR").unwrap_or_else(|_| "./ui/static".to_string());

        let site_name =
            std::env::var("SNIPBOX_SITE_NAME").unwrap_or_else(|_| "Snipbox".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            static_dir = %static_dir,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            static_dir,
            site_name,
        })
    }
}

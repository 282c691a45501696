use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Unset means the in-memory backend.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub event_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let event_capacity = env::var("EVENT_CHANNEL_CAPACITY")
            .ok()
            .and_then(|c| c.parse::<usize>().ok())
            .unwrap_or(64);
        Ok(Self {
            port,
            database_url,
            host,
            event_capacity,
        })
    }

    pub fn require_database_url(&self) -> anyhow::Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))
    }
}

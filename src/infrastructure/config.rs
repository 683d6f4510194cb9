use std::env;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_secret: String,
}

impl AppConfig {
    /// Reads configuration from the environment, loading `.env` first.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            warn!("SESSION_SECRET not set, using development default");
            "dev-session-secret".to_string()
        });

        Self {
            bind_addr,
            session_secret,
        }
    }
}

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default — the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// WhatsApp business number for the outbound deep link
    /// (country code, no leading zero).
    pub whatsapp_number: String,
    /// Fixed 3-letter currency prefix for rendered prices.
    pub currency: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            whatsapp_number: env_or("WHATSAPP_NUMBER", "97156778999"),
            currency: env_or("CURRENCY", "AED"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

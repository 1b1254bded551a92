use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;

/// Which persistence backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Process-local maps; data is lost on restart
    Memory,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub completion_timeout: Duration,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let store = match env::var("STORE").as_deref() {
            Err(_) | Ok("postgres") => StoreKind::Postgres,
            Ok("memory") => StoreKind::Memory,
            Ok(other) => bail!("STORE must be 'postgres' or 'memory', got '{}'", other),
        };

        let database_url = match store {
            StoreKind::Postgres => {
                Some(env::var("DATABASE_URL").context("DATABASE_URL must be set")?)
            }
            StoreKind::Memory => env::var("DATABASE_URL").ok(),
        };

        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        if openai_api_key.trim().is_empty() {
            bail!("OPENAI_API_KEY must not be empty");
        }

        Ok(Self {
            store,
            database_url,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key,
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| crate::domains::flashcards::DEFAULT_MODEL.to_string()),
            completion_timeout: Duration::from_secs(
                env::var("COMPLETION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("COMPLETION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            jwt_secret: env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET must be set")?,
            jwt_issuer: env::var("AUTH_JWT_ISSUER").unwrap_or_else(|_| "studycards".to_string()),
            allowed_origins: parse_origins(env::var("ALLOWED_ORIGINS").ok().as_deref()),
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

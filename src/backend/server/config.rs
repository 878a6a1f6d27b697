/**
 * Server Configuration
 *
 * Configuration is read once from environment variables at startup and is
 * immutable afterwards.
 *
 * # Variables
 *
 * - `JWT_SECRET` (required) - HMAC signing secret
 * - `BCRYPT_COST` (default 10) - bcrypt work factor, 4..=31
 * - `SERVER_PORT` (default 4000)
 * - `DATABASE_URL` (optional) - PostgreSQL; unset means in-memory storage
 * - `COOKIE_SECURE` (default false) - mark the session cookie `Secure`
 *
 * A missing signing secret is fatal: the server refuses to start rather than
 * signing tokens with a guessable default.
 */

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::store::{MemoryStore, PgStore, PostStore, UserStore};

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings shared by the token service and the password verifier
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Append `Secure` to the session cookie
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, bcrypt_cost: u32) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            bcrypt_cost,
            cookie_secure: false,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub auth: AuthConfig,
    pub port: u16,
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(ConfigError::InvalidValue {
                    name: "BCRYPT_COST",
                    value,
                })?,
            None => DEFAULT_BCRYPT_COST,
        };

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match lookup("COOKIE_SECURE").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "COOKIE_SECURE",
                    value: other.to_string(),
                })
            }
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            auth: AuthConfig {
                jwt_secret,
                bcrypt_cost,
                cookie_secure,
            },
            port,
            database_url,
        })
    }
}

/// User and post stores selected at startup
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            posts: store,
        }
    }
}

/// Connect to PostgreSQL and run migrations, or fall back to memory
///
/// A configured database that cannot be reached is an error; only an
/// unset `DATABASE_URL` selects the in-memory store.
pub async fn load_store(database_url: Option<&str>) -> Result<Stores, sqlx::Error> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Using in-memory storage; data is lost on restart.");
        return Ok(Stores::in_memory());
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    let store = Arc::new(PgStore::new(pool));
    Ok(Stores {
        users: store.clone(),
        posts: store,
    })
}

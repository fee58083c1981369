//! Server Configuration
//!
//! Everything the server reads from the environment, parsed once at
//! startup into an immutable [`ApiConfig`]. Parsing goes through a lookup
//! function so tests never touch the process environment.

use std::str::FromStr;
use std::time::Duration;

use auth::AuthConfig;
use profile::GithubConfig;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_CLIENT_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error(transparent)]
    Auth(#[from] auth::ConfigError),

    #[error("DATABASE_URL is not a valid connection string: {0}")]
    DatabaseUrl(#[from] sqlx::Error),
}

/// Where the database lives
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        name: String,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            DatabaseConfig::Url(url) => Ok(PgConnectOptions::from_str(url)?),
            DatabaseConfig::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name);
                Ok(match password {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server_port: u16,
    pub client_origins: Vec<String>,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub github: GithubConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset and blank are the same thing
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        // Key material is used byte for byte
        let raw = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let secret = raw("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let mut auth = AuthConfig::new(secret)?;

        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            let secs = parse::<u64>("TOKEN_TTL_SECS", &ttl)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "TOKEN_TTL_SECS",
                    value: ttl,
                });
            }
            auth.token_ttl = Duration::from_secs(secs);
        }
        if let Some(secure) = get("COOKIE_SECURE") {
            auth.cookie_secure = parse_bool("COOKIE_SECURE", &secure)?;
        }
        auth.password_pepper = raw("PASSWORD_PEPPER").map(String::into_bytes);

        let server_port = match get("SERVER_PORT") {
            Some(port) => parse("SERVER_PORT", &port)?,
            None => DEFAULT_SERVER_PORT,
        };

        let client_origins = get("CLIENT_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CLIENT_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: match get("DB_PORT") {
                    Some(port) => parse("DB_PORT", &port)?,
                    None => DEFAULT_DB_PORT,
                },
                user: get("DB_USER").ok_or(ConfigError::Missing("DATABASE_URL or DB_USER"))?,
                password: get("DB_PASS"),
                name: get("DB_NAME").ok_or(ConfigError::Missing("DATABASE_URL or DB_NAME"))?,
            },
        };

        let github = GithubConfig {
            client_id: get("GITHUB_CLIENT_ID"),
            client_secret: get("GITHUB_CLIENT_SECRET"),
            ..GithubConfig::default()
        };

        Ok(Self {
            server_port,
            client_origins,
            database,
            auth,
            github,
        })
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

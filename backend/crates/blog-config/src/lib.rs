mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::{AuthConfig, TransportKind};
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "blog.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_COOKIE_NAME: &str = "token";
const DEFAULT_COOKIE_SAME_SITE: &str = "lax";
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;

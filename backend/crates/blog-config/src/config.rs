use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, LoggingConfig,
    ServerConfig, TransportKind,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "BLOG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".blog";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BLOG_CONFIG_DIR env var, else use ./.blog/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BLOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BLOG_CONFIG_DIR env var > ./.blog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(self.server.environment)?;
        self.cors.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );

        match self.auth.transport {
            TransportKind::Cookie => info!(
                "  auth: cookie '{}' (secure: {}, same_site: {})",
                self.auth.cookie_name,
                self.auth.cookie_secure_for(self.server.environment),
                self.auth.cookie_same_site
            ),
            TransportKind::Bearer => info!("  auth: bearer header"),
        }
        info!(
            "  auth: jwt secret {}",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "MISSING"
            }
        );

        info!("  cors: {}", self.cors.allowed_origins.join(", "));
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BLOG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BLOG_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("BLOG_ENVIRONMENT", &mut self.server.environment);

        // Database
        Self::apply_env_string("BLOG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BLOG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("BLOG_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("BLOG_AUTH_TRANSPORT", &mut self.auth.transport);
        Self::apply_env_string("BLOG_COOKIE_NAME", &mut self.auth.cookie_name);
        Self::apply_env_option_bool("BLOG_COOKIE_SECURE", &mut self.auth.cookie_secure);
        Self::apply_env_string("BLOG_COOKIE_SAME_SITE", &mut self.auth.cookie_same_site);

        // CORS
        Self::apply_env_list("BLOG_CORS_ALLOWED_ORIGINS", &mut self.cors.allowed_origins);

        // Logging
        Self::apply_env_parse("BLOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BLOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BLOG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for Option<bool> values
    fn apply_env_option_bool(var_name: &str, target: &mut Option<bool>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val == "true" || val == "1");
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}

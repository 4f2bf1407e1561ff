use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] blog_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] blog_auth::AuthError),

    #[error("Invalid {setting}: {message}")]
    Setting { setting: String, message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad slash-command input, etc.) or downstream layers
/// (DB, Slack webhook, missing configuration).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DbError(String),
    Upstream(String),
    WebhookError(String),
    Config(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::Upstream(msg) => write!(f, "Upstream API Error: {msg}"),
            ServerError::WebhookError(msg) => write!(f, "Webhook Error: {msg}"),
            ServerError::Config(msg) => write!(f, "Config Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

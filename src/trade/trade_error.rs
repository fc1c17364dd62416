use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum TradeError {
    Network(String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeError::Network(msg) => write!(f, "Network error: {msg}"),
            TradeError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            TradeError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for TradeError {}

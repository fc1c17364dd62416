pub mod fetch;
pub mod flavor;
pub mod models;
pub mod notify;
pub mod query;
pub mod reconcile;
pub mod trade_error;
pub mod watcher;

pub use trade_error::TradeError;

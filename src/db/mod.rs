pub mod connection;
pub mod users;
pub mod watches;

pub use connection::Database;

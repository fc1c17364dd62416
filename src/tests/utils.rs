use crate::db::connection::{init_db, Database};
use astra::{Body, Request, Response};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

pub const TEST_TOKEN: &str = "sekrit-test-token";

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("router_test_{nanos}.sqlite"));

    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Every slash-command test needs the shared token in the environment.
pub fn set_command_token() {
    std::env::set_var("SLACK_COMMAND_TOKEN", TEST_TOKEN);
}

pub fn get(path_and_query: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path_and_query)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

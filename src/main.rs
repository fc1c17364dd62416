use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod errors;
mod ladder;
mod lifting;
mod responses;
mod router;
mod slack;
mod steam;
mod templates;
mod trade;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Create the database handle
    let db = Database::new("steamslack.sqlite3");

    // 2️⃣ Initialize database from schema.sql
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the market poller
    trade::watcher::spawn(db.clone());

    // 4️⃣ Start the server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 5️⃣ Serve requests, passing db handle into closure
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

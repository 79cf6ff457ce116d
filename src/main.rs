use crate::db::connection::{init_db, Database};
use crate::loader::DatasetLoader;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod db;
mod errors;
mod favorites;
mod loader;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Create the database handle (the localStorage stand-in)
    let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| "favorites.sqlite3".to_string());
    let db = Database::new(db_path);

    // 2️⃣ Initialize database from schema.sql
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Load the dataset: single attempt, held for the whole session.
    // A failure is not fatal; the page renders the error message instead
    // of the grid.
    let dataset = DatasetLoader::from_env().and_then(|loader| loader.load());
    match &dataset {
        Ok(listings) => println!("Loaded {} listings", listings.len()),
        Err(e) => eprintln!("⚠️ Dataset load failed: {e}"),
    }

    let state = Arc::new(AppState::new(db, dataset));

    // 4️⃣ Start the server
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("❌ Invalid BIND_ADDR: {e}");
            std::process::exit(1);
        });
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 5️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

//! statusweb binary: serves the status page on port 8080 until Ctrl+C.

use std::process;

use log::error;
use statusweb::{HttpServer, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the logger, showing info-level output unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = match HttpServer::bind_and_listen(ServerConfig::default()) {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    server.serve_forever().await;
}

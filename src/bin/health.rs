//! Standalone liveness endpoint.
//!
//! Serves exactly one route, GET `/`, with a static body so deployment
//! probes can confirm the container is up. Runs independently of the bot.

use axum::{Router, routing::get};
use log::info;

const BODY: &str = "Server running 200 OK";
const DEFAULT_PORT: u16 = 8000;

fn app() -> Router {
    Router::new().route("/", get(|| async { BODY }))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("health=info"))
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Health endpoint listening on port {}", port);
    axum::serve(listener, app()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_serves_exact_body() -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app()).await.unwrap();
        });

        // Stateless: repeated requests get the identical answer.
        for _ in 0..2 {
            let response = reqwest::get(format!("http://{addr}/")).await?;
            assert_eq!(response.status(), reqwest::StatusCode::OK);
            assert_eq!(response.text().await?, "Server running 200 OK");
        }
        Ok(())
    }
}

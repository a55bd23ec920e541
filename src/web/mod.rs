use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::framework::AppData;

mod error;
pub use error::AppError;

pub mod render;

mod routes;

pub mod session;

mod sse;

pub fn router(data: AppData) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/game", get(routes::current))
        .route("/difficulty/:difficulty", post(routes::difficulty))
        .route("/attempt/:guess", post(routes::attempt))
        .route("/new_game", get(routes::new_game))
        .route("/static/wordle.js", get(routes::script))
        .route("/static/style.css", get(routes::style))
        .route("/static/gooey-balls.svg", get(routes::spinner))
        .with_state(data)
}

pub async fn serve(data: AppData) -> std::io::Result<()> {
    let address = data.config().server.address;
    let listener = tokio::net::TcpListener::bind(address).await?;

    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, router(data))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("could not listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }

    info!("shutting down");
}

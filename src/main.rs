#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod framework;
mod games;
mod web;

use tracing::info;
use tracing_unwrap::ResultExt;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    framework::logging::init_tracing();

    info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = framework::Config::load().expect_or_log("configuration could not be loaded");

    let data = framework::AppData::new(config)
        .await
        .expect_or_log("could not set up game data");

    web::serve(data).await.expect_or_log("server failed");
}

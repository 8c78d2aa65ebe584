#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "authentiscan stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let site = SiteConfig::from_env()?;

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    options.site_addr = site.addr;

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(site.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: site.addr, source })?;

    tracing::info!(addr = %site.addr, "authentiscan listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

use dioxus::prelude::*;

use ui::ContactsApp;

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start Tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

/// Serve the `/contacts` Resource API and the web app from one listener.
#[cfg(feature = "server")]
async fn launch_server() {
    use std::sync::Arc;

    use api::config::Settings;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use store::SqliteStore;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().expect("Failed to load settings");

    let store = Arc::new(
        SqliteStore::open(&settings.database.url)
            .await
            .expect("Failed to open contact database"),
    );
    tracing::info!("Connected to SQLite database at {}", settings.database.url);

    let router = api::router(store.clone()).serve_dioxus_application(ServeConfig::new(), App);

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server running on http://{}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }

    store.close().await;
    tracing::info!("Database connection closed");
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[component]
fn App() -> Element {
    rsx! {
        ContactsApp {}
    }
}

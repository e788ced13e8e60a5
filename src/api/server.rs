use axum::{
    Router, middleware,
    routing::{any, get},
};
use tokio::net::TcpListener;
use tower_http::{timeout::RequestBodyTimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use super::{
    error::apply_error_policy,
    services::{
        create_contact, get_contact, greeting, list_contacts, method_not_allowed, not_found,
    },
    state::AppState,
};
use crate::config::Config;
use crate::store::ContactStore;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the application router around the given state
pub fn router(state: AppState) -> Router {
    let read_timeout = state.config.server.read_timeout();

    Router::new()
        .route("/", any(greeting))
        // GET routes would answer HEAD implicitly; the API only serves GET
        .route(
            "/contacts",
            get(list_contacts)
                .head(method_not_allowed)
                .post(create_contact),
        )
        .route(
            "/contacts/{id}",
            get(get_contact).head(method_not_allowed),
        )
        // Must follow the routes it applies to
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::map_response_with_state(
            state.clone(),
            apply_error_policy,
        ))
        .layer(RequestBodyTimeoutLayer::new(read_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), AnyError> {
    let address = config.server.bind_addr;

    let store = ContactStore::seeded();
    info!(contacts = store.len().await, "Contact store seeded");

    let app = router(AppState::new(config, store));

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Done");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal(tokio::signal::ctrl_c(), "ctrl_c");

    #[cfg(unix)]
    let terminate = wait_for_signal(
        async {
            use tokio::signal::unix::{SignalKind, signal};
            let mut sigterm = signal(SignalKind::terminate())?;
            sigterm.recv().await;
            Ok::<(), std::io::Error>(())
        },
        "sigterm",
    );

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Resolves once `signal` fires. If the handler cannot be installed the error
/// is logged and this never resolves, leaving shutdown to the other signal.
async fn wait_for_signal<F>(signal: F, name: &'static str)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        error!(signal = name, error = %err, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use gaswatch_api::config::{LogFormat, ServerConfig};
use gaswatch_api::router::build_app_router;
use gaswatch_api::state::AppState;
use gaswatch_events::{AlertDispatcher, LogTransport, Notifier, SmsTransport, TwilioTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid configuration");

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = gaswatch_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    gaswatch_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    gaswatch_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Alert delivery ---
    let transport: Arc<dyn SmsTransport> = match &config.twilio {
        Some(twilio) => Arc::new(
            TwilioTransport::new(twilio.clone()).expect("Failed to build Twilio HTTP client"),
        ),
        None => {
            tracing::warn!("TWILIO_ACCOUNT_SID not set, leak alerts will be logged only");
            Arc::new(LogTransport)
        }
    };
    let notifier = Notifier::new(transport, config.alert.clone());
    let (alerts, alert_worker) = AlertDispatcher::start(notifier, config.alert_queue_capacity);

    // --- App state ---
    let state = AppState { pool, alerts };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    // The router (and every dispatcher handle in its state) is gone, so the
    // alert queue is closed; give the worker time to drain it.
    tracing::info!("Server stopped accepting connections, draining alert queue");
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    match tokio::time::timeout(drain, alert_worker).await {
        Ok(_) => tracing::info!("Alert worker stopped"),
        Err(_) => tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Alert worker did not drain in time, pending alerts abandoned"
        ),
    }

    tracing::info!("Graceful shutdown complete");
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "gaswatch_api=debug,gaswatch_events=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

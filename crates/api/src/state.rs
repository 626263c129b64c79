use gaswatch_events::AlertDispatcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and dispatcher are handles).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each query checks a connection out and
    /// returns it when done.
    pub pool: gaswatch_db::DbPool,
    /// Queue for leak alerts; delivery happens on a background worker.
    pub alerts: AlertDispatcher,
}

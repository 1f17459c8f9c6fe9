use std::sync::Arc;

use portfolio_mailer::ContactMailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Contact email relay; `None` when SMTP is not configured, in which
    /// case contact submissions are refused with an explanatory body.
    pub mailer: Option<Arc<ContactMailer>>,
}

//! Repository for the `email_requests` rate-limit ledger.

use crate::DbPool;

/// Trailing window within which a second contact email is rejected.
pub const RATE_LIMIT_WINDOW_SECS: i64 = 300;

/// Append-only ledger of sent contact emails, checked for recency before
/// each send.
///
/// The check-then-act sequence around this ledger is deliberately
/// unsynchronized: two submissions in the same instant can both pass the
/// recency check. See DESIGN.md.
pub struct EmailRequestRepo;

impl EmailRequestRepo {
    /// Record a sent contact email at the given unix-seconds timestamp.
    pub async fn record(pool: &DbPool, email: &str, created_at: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO email_requests (email, created_at) VALUES (?, ?)")
            .bind(email)
            .bind(created_at)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Whether any ledger row falls strictly within the trailing window,
    /// measured against the supplied `now` (unix seconds). A row exactly
    /// `window_secs` old no longer counts as recent.
    pub async fn recent_exists(
        pool: &DbPool,
        now: i64,
        window_secs: i64,
    ) -> Result<bool, sqlx::Error> {
        let cutoff = now - window_secs;
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM email_requests WHERE created_at > ?")
                .bind(cutoff)
                .fetch_one(pool)
                .await?;

        Ok(count > 0)
    }
}

//! Fire-and-forget audit logging
//!
//! Audit entries are best-effort: a failed write must never fail the
//! request that triggered it, so the insert runs on a detached task and
//! failures only reach the log.

use uuid::Uuid;

use wardline_db::{AuditLogRepository, CreateAuditLog, Repositories};
use wardline_types::UserId;

/// Record an audit entry without blocking the calling handler
pub fn record(
    repos: &Repositories,
    user_id: UserId,
    action: &'static str,
    details: String,
    ip_address: Option<String>,
) {
    let audit_logs = repos.audit_logs.clone();

    tokio::spawn(async move {
        let entry = CreateAuditLog {
            id: Uuid::new_v4(),
            user_id: user_id.0,
            action: action.to_string(),
            details,
            ip_address,
        };

        if let Err(e) = audit_logs.create(entry).await {
            tracing::warn!(action, error = %e, "Audit log write failed");
        }
    });
}

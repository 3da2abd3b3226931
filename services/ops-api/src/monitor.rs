//! Background presence sweeps
//!
//! Three periodic tasks over the presence table: overdue shifts raise
//! alerts, inactive staff are marked idle, and doctors who go quiet for
//! too long raise a critical alert. The sweeps only write rows; clients
//! observe the results by polling `/alerts` and `/staff/presence`.

use std::collections::HashSet;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use wardline_db::{
    AlertRepository, CreateAlert, PresenceRepository, Repositories, UserRepository,
};
use wardline_types::{Activity, AlertPriority, Role};

/// Shift-overdue sweep cadence
const SHIFT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
/// Idle-detection sweep cadence
const IDLE_SWEEP_INTERVAL: Duration = Duration::from_secs(30);
/// Doctor-inactivity sweep cadence
const DOCTOR_SWEEP_INTERVAL: Duration = Duration::from_secs(120);

/// Minutes without activity before an on-duty member is marked idle
const IDLE_AFTER_MINUTES: i64 = 10;
/// Minutes without activity before a doctor raises a critical alert
const DOCTOR_INACTIVE_MINUTES: i64 = 30;

/// Spawn all presence sweeps onto the runtime
pub fn spawn_monitors(repos: Repositories) {
    tokio::spawn(shift_monitor(repos.clone()));
    tokio::spawn(idle_monitor(repos.clone()));
    tokio::spawn(doctor_inactivity_monitor(repos));
}

/// Raise a high-priority alert for on-duty staff past their shift end.
///
/// Alerts fire once per overdue shift per process; the set resets when
/// the member is no longer overdue.
async fn shift_monitor(repos: Repositories) {
    let mut interval = tokio::time::interval(SHIFT_SWEEP_INTERVAL);
    let mut alerted: HashSet<Uuid> = HashSet::new();

    loop {
        interval.tick().await;
        if let Err(e) = sweep_overdue_shifts(&repos, &mut alerted).await {
            tracing::warn!(error = %e, "Shift sweep failed");
        }
    }
}

async fn sweep_overdue_shifts(
    repos: &Repositories,
    alerted: &mut HashSet<Uuid>,
) -> Result<(), wardline_db::DbError> {
    let now = Utc::now();
    let presences = repos.presence.on_duty().await?;

    let mut still_overdue = HashSet::new();

    for presence in presences {
        let overdue = presence.shift_end.is_some_and(|end| now > end);
        if !overdue {
            continue;
        }
        still_overdue.insert(presence.user_id);

        if alerted.contains(&presence.user_id) {
            continue;
        }

        repos
            .alerts
            .create(CreateAlert {
                id: Uuid::new_v4(),
                alert_type: "shift_overdue".to_string(),
                message: format!(
                    "Staff member (ID: {}) exceeded shift time",
                    presence.user_id
                ),
                priority: AlertPriority::High.to_string(),
                related_user_id: Some(presence.user_id),
            })
            .await?;

        tracing::info!(user_id = %presence.user_id, "Shift overdue alert raised");
    }

    *alerted = still_overdue;
    Ok(())
}

/// Mark on-duty staff idle after a period without activity
async fn idle_monitor(repos: Repositories) {
    let mut interval = tokio::time::interval(IDLE_SWEEP_INTERVAL);

    loop {
        interval.tick().await;
        if let Err(e) = sweep_idle(&repos).await {
            tracing::warn!(error = %e, "Idle sweep failed");
        }
    }
}

async fn sweep_idle(repos: &Repositories) -> Result<(), wardline_db::DbError> {
    let cutoff = Utc::now() - chrono::Duration::minutes(IDLE_AFTER_MINUTES);
    let presences = repos.presence.on_duty().await?;

    for presence in presences {
        if presence.last_active < cutoff && presence.activity != Activity::Idle.as_str() {
            repos
                .presence
                .set_activity(presence.user_id, Activity::Idle.as_str())
                .await?;
            tracing::debug!(user_id = %presence.user_id, "Marked idle");
        }
    }

    Ok(())
}

/// Raise a critical alert for doctors inactive beyond the threshold
async fn doctor_inactivity_monitor(repos: Repositories) {
    let mut interval = tokio::time::interval(DOCTOR_SWEEP_INTERVAL);
    let mut alerted: HashSet<Uuid> = HashSet::new();

    loop {
        interval.tick().await;
        if let Err(e) = sweep_inactive_doctors(&repos, &mut alerted).await {
            tracing::warn!(error = %e, "Doctor inactivity sweep failed");
        }
    }
}

async fn sweep_inactive_doctors(
    repos: &Repositories,
    alerted: &mut HashSet<Uuid>,
) -> Result<(), wardline_db::DbError> {
    let cutoff = Utc::now() - chrono::Duration::minutes(DOCTOR_INACTIVE_MINUTES);
    let presences = repos.presence.on_duty().await?;

    let mut still_inactive = HashSet::new();

    for presence in presences {
        if presence.last_active >= cutoff {
            continue;
        }

        let Some(user) = repos.users.find_by_id(presence.user_id).await? else {
            continue;
        };
        if user.role != Role::Doctor.to_string() {
            continue;
        }

        still_inactive.insert(user.id);
        if alerted.contains(&user.id) {
            continue;
        }

        repos
            .alerts
            .create(CreateAlert {
                id: Uuid::new_v4(),
                alert_type: "doctor_offline".to_string(),
                message: format!(
                    "Doctor {} inactive for {DOCTOR_INACTIVE_MINUTES}+ minutes",
                    user.full_name
                ),
                priority: AlertPriority::Critical.to_string(),
                related_user_id: Some(user.id),
            })
            .await?;

        tracing::info!(user_id = %user.id, "Doctor inactivity alert raised");
    }

    *alerted = still_inactive;
    Ok(())
}

//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Staff presence row from the database
#[derive(Debug, Clone, FromRow)]
pub struct StaffPresenceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub activity: String,
    pub location: String,
    pub shift_start: Option<DateTime<Utc>>,
    pub shift_end: Option<DateTime<Utc>>,
    pub last_active: DateTime<Utc>,
    pub assigned_patients: i32,
}

/// Patient row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PatientRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub illness: String,
    pub room_number: String,
    pub assigned_doctor_id: Uuid,
    pub assigned_nurse_id: Uuid,
    pub medical_history: Option<String>,
    pub status: String,
    pub admitted_at: DateTime<Utc>,
}

/// Vital-sign record row from the database
#[derive(Debug, Clone, FromRow)]
pub struct VitalRecordRow {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_by: Uuid,
    pub temperature: Option<f64>,
    pub blood_pressure: Option<String>,
    pub pulse: Option<i32>,
    pub respiration_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Medication schedule row from the database
#[derive(Debug, Clone, FromRow)]
pub struct MedicationScheduleRow {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub route: Option<String>,
    pub frequency_hours: i32,
    pub start_time: DateTime<Utc>,
    pub next_dose_time: DateTime<Utc>,
    pub last_administered_at: Option<DateTime<Utc>>,
    pub status: String,
    pub assigned_nurse_id: Option<Uuid>,
    pub created_by: Uuid,
}

/// Care-plan step row from the database
#[derive(Debug, Clone, FromRow)]
pub struct CarePlanStepRow {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub due_time: Option<DateTime<Utc>>,
    pub status: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Task row from the database
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assigned_to: Uuid,
    pub assigned_by: Uuid,
    pub priority: String,
    pub status: String,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Alert row from the database
#[derive(Debug, Clone, FromRow)]
pub struct AlertRow {
    pub id: Uuid,
    pub alert_type: String,
    pub message: String,
    pub priority: String,
    pub related_user_id: Option<Uuid>,
    pub acknowledged: bool,
    pub created_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
}

/// Audit log row from the database
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Shift row from the database
#[derive(Debug, Clone, FromRow)]
pub struct ShiftRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub break_minutes: i32,
    pub overtime_minutes: i32,
    pub date: String,
}

/// Presence joined with the owning user's identity fields.
///
/// The presence board renders name and role next to each status, so the
/// repository returns the join rather than forcing N user lookups.
#[derive(Debug, Clone, FromRow)]
pub struct PresenceBoardRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub role: String,
    pub status: String,
    pub activity: String,
    pub location: String,
    pub assigned_patients: i32,
    pub last_active: DateTime<Utc>,
}

// Conversion implementations from Row types to wardline-types domain types
impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> wardline_types::UserId {
        wardline_types::UserId(self.id)
    }
}

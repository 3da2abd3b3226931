//! Repository traits
//!
//! Define async repository interfaces for database operations. Every
//! clinical table is an independent keyed store; there is no cross-table
//! transaction surface here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user.
    ///
    /// A duplicate username or email surfaces as
    /// [`crate::DbError::UniqueViolation`] from the insert itself.
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Set the active flag (soft deactivate / reactivate)
    async fn set_active(&self, id: Uuid, active: bool) -> DbResult<()>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
}

/// Staff presence repository trait
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// Find the presence record for a user
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Option<StaffPresenceRow>>;

    /// All presence records joined with user identity, for the board view
    async fn board(&self) -> DbResult<Vec<PresenceBoardRow>>;

    /// All on-duty presence records (monitor sweeps)
    async fn on_duty(&self) -> DbResult<Vec<StaffPresenceRow>>;

    /// Create an empty off-duty presence record for a new user
    async fn create_for_user(&self, user_id: Uuid) -> DbResult<StaffPresenceRow>;

    /// Update status/activity/location and bump last_active
    async fn update_status(&self, user_id: Uuid, update: PresenceUpdate) -> DbResult<()>;

    /// Mark a user on duty with a fresh shift window
    async fn clock_in(&self, user_id: Uuid, shift_start: DateTime<Utc>) -> DbResult<()>;

    /// Set activity only (idle sweep)
    async fn set_activity(&self, user_id: Uuid, activity: &str) -> DbResult<()>;
}

/// Presence field update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct PresenceUpdate {
    pub status: Option<String>,
    pub activity: Option<String>,
    pub location: Option<String>,
}

/// Patient repository trait
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find a patient by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PatientRow>>;

    /// List all patients, most recently admitted first
    async fn list(&self) -> DbResult<Vec<PatientRow>>;

    /// Admit a new patient
    async fn create(&self, patient: CreatePatient) -> DbResult<PatientRow>;
}

/// Create patient input
#[derive(Debug, Clone)]
pub struct CreatePatient {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub illness: String,
    pub room_number: String,
    pub assigned_doctor_id: Uuid,
    pub assigned_nurse_id: Uuid,
}

/// Vital-sign repository trait
#[async_trait]
pub trait VitalRepository: Send + Sync {
    /// All records for a patient, newest first
    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<VitalRecordRow>>;

    /// Record a new set of vitals
    async fn create(&self, vital: CreateVitalRecord) -> DbResult<VitalRecordRow>;
}

/// Create vital record input
#[derive(Debug, Clone)]
pub struct CreateVitalRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_by: Uuid,
    pub temperature: Option<f64>,
    pub blood_pressure: Option<String>,
    pub pulse: Option<i32>,
    pub respiration_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub notes: Option<String>,
}

/// Medication schedule repository trait
#[async_trait]
pub trait MedicationRepository: Send + Sync {
    /// Find a schedule by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<MedicationScheduleRow>>;

    /// All schedules for a patient ordered by next dose time
    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<MedicationScheduleRow>>;

    /// Schedule a new medication
    async fn create(&self, med: CreateMedicationSchedule) -> DbResult<MedicationScheduleRow>;

    /// Record an administration and advance the next dose time
    async fn mark_administered(
        &self,
        id: Uuid,
        administered_at: DateTime<Utc>,
        next_dose_time: DateTime<Utc>,
    ) -> DbResult<()>;
}

/// Create medication schedule input
#[derive(Debug, Clone)]
pub struct CreateMedicationSchedule {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub route: Option<String>,
    pub frequency_hours: i32,
    pub start_time: DateTime<Utc>,
    pub next_dose_time: DateTime<Utc>,
    pub assigned_nurse_id: Option<Uuid>,
    pub created_by: Uuid,
}

/// Care-plan repository trait
#[async_trait]
pub trait CarePlanRepository: Send + Sync {
    /// Find a step by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<CarePlanStepRow>>;

    /// All steps for a patient ordered by due time
    async fn find_by_patient_id(&self, patient_id: Uuid) -> DbResult<Vec<CarePlanStepRow>>;

    /// Add a step to a patient's care plan
    async fn create(&self, step: CreateCarePlanStep) -> DbResult<CarePlanStepRow>;

    /// Update a step's status; `completed_at` is set when provided
    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        completed_at: Option<DateTime<Utc>>,
    ) -> DbResult<()>;
}

/// Create care-plan step input
#[derive(Debug, Clone)]
pub struct CreateCarePlanStep {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub due_time: Option<DateTime<Utc>>,
    pub created_by: Uuid,
}

/// Task repository trait
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, newest first
    async fn list_all(&self) -> DbResult<Vec<TaskRow>>;

    /// Tasks assigned to a user, newest first
    async fn list_assigned_to(&self, user_id: Uuid) -> DbResult<Vec<TaskRow>>;

    /// Create a task
    async fn create(&self, task: CreateTask) -> DbResult<TaskRow>;
}

/// Create task input
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assigned_to: Uuid,
    pub assigned_by: Uuid,
    pub priority: String,
    pub deadline: DateTime<Utc>,
}

/// Alert repository trait
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Find an alert by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<AlertRow>>;

    /// Unacknowledged alerts, newest first
    async fn list_unacknowledged(&self) -> DbResult<Vec<AlertRow>>;

    /// Raise a new alert
    async fn create(&self, alert: CreateAlert) -> DbResult<AlertRow>;

    /// Acknowledge an alert
    async fn acknowledge(&self, id: Uuid, acknowledged_at: DateTime<Utc>) -> DbResult<()>;
}

/// Create alert input
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub id: Uuid,
    pub alert_type: String,
    pub message: String,
    pub priority: String,
    pub related_user_id: Option<Uuid>,
}

/// Audit log repository trait
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Latest entries, newest first
    async fn list_recent(&self, limit: i64) -> DbResult<Vec<AuditLogRow>>;

    /// Append an entry
    async fn create(&self, entry: CreateAuditLog) -> DbResult<AuditLogRow>;
}

/// Create audit log input
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub details: String,
    pub ip_address: Option<String>,
}

/// Shift repository trait
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// All shifts for a user, newest first
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<ShiftRow>>;

    /// Open a shift at clock-in
    async fn create(&self, shift: CreateShift) -> DbResult<ShiftRow>;
}

/// Create shift input
#[derive(Debug, Clone)]
pub struct CreateShift {
    pub id: Uuid,
    pub user_id: Uuid,
    pub clock_in: DateTime<Utc>,
    pub date: String,
}

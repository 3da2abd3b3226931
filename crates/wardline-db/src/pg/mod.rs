//! PostgreSQL repository implementations

mod alert;
mod audit;
mod care_plan;
mod medication;
mod patient;
mod presence;
mod shift;
mod task;
mod user;
mod vital;

pub use alert::PgAlertRepository;
pub use audit::PgAuditLogRepository;
pub use care_plan::PgCarePlanRepository;
pub use medication::PgMedicationRepository;
pub use patient::PgPatientRepository;
pub use presence::PgPresenceRepository;
pub use shift::PgShiftRepository;
pub use task::PgTaskRepository;
pub use user::PgUserRepository;
pub use vital::PgVitalRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub presence: PgPresenceRepository,
    pub patients: PgPatientRepository,
    pub vitals: PgVitalRepository,
    pub medications: PgMedicationRepository,
    pub care_plans: PgCarePlanRepository,
    pub tasks: PgTaskRepository,
    pub alerts: PgAlertRepository,
    pub audit_logs: PgAuditLogRepository,
    pub shifts: PgShiftRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            presence: PgPresenceRepository::new(pool.clone()),
            patients: PgPatientRepository::new(pool.clone()),
            vitals: PgVitalRepository::new(pool.clone()),
            medications: PgMedicationRepository::new(pool.clone()),
            care_plans: PgCarePlanRepository::new(pool.clone()),
            tasks: PgTaskRepository::new(pool.clone()),
            alerts: PgAlertRepository::new(pool.clone()),
            audit_logs: PgAuditLogRepository::new(pool.clone()),
            shifts: PgShiftRepository::new(pool),
        }
    }
}

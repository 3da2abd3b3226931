//! HTTP handlers

mod alerts;
mod audit_log;
mod auth;
mod care_plan;
mod health;
mod medications;
mod patients;
mod presence;
mod tasks;
mod vitals;

pub use alerts::{acknowledge_alert, list_alerts};
pub use audit_log::list_audit_logs;
pub use auth::{login, me, register};
pub use care_plan::{add_care_plan_step, list_care_plan, update_care_plan_status};
pub use health::{health, ready};
pub use medications::{add_medication, list_medications, mark_administered};
pub use patients::{create_patient, list_patients};
pub use presence::{staff_presence, update_status};
pub use tasks::{create_task, list_tasks};
pub use vitals::{list_vitals, record_vitals};

//! Input validation tests
//!
//! Tests for the request vocabularies and header parsing the handlers
//! gate on before touching any table.

use std::str::FromStr;

use wardline_types::{Activity, PresenceStatus, Role, TaskPriority, WorkStatus};

/// Mirrors the extractor's Authorization header parsing
fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

// ============================================================================
// Bearer header parsing
// ============================================================================

#[test]
fn test_bearer_header_accepted() {
    assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
}

#[test]
fn test_bearer_prefix_is_case_sensitive() {
    assert_eq!(extract_bearer("bearer abc"), None);
    assert_eq!(extract_bearer("BEARER abc"), None);
}

#[test]
fn test_basic_auth_rejected() {
    assert_eq!(extract_bearer("Basic dXNlcjpwdw=="), None);
}

#[test]
fn test_bare_token_rejected() {
    assert_eq!(extract_bearer("abc.def.ghi"), None);
}

// ============================================================================
// Role vocabulary
// ============================================================================

#[test]
fn test_all_spec_roles_parse() {
    for role in ["admin", "doctor", "nurse", "receptionist", "staff"] {
        assert!(Role::from_str(role).is_ok(), "role: {role}");
    }
}

#[test]
fn test_unknown_roles_rejected() {
    for role in ["root", "superadmin", "patient", ""] {
        assert!(Role::from_str(role).is_err(), "role: {role}");
    }
}

// ============================================================================
// Presence vocabulary
// ============================================================================

#[test]
fn test_presence_status_values() {
    assert!(PresenceStatus::from_str("on-duty").is_ok());
    assert!(PresenceStatus::from_str("off-duty").is_ok());
    // Underscore spelling is not part of the vocabulary
    assert!(PresenceStatus::from_str("on_duty").is_err());
}

#[test]
fn test_activity_values() {
    for activity in ["active", "busy", "idle"] {
        assert!(Activity::from_str(activity).is_ok(), "activity: {activity}");
    }
    assert!(Activity::from_str("away").is_err());
}

// ============================================================================
// Task and care-plan vocabularies
// ============================================================================

#[test]
fn test_task_priority_values() {
    for priority in ["low", "medium", "high", "critical"] {
        assert!(
            TaskPriority::from_str(priority).is_ok(),
            "priority: {priority}"
        );
    }
    assert!(TaskPriority::from_str("urgent").is_err());
}

#[test]
fn test_work_status_values() {
    for status in ["pending", "in-progress", "completed"] {
        assert!(WorkStatus::from_str(status).is_ok(), "status: {status}");
    }
    assert!(WorkStatus::from_str("done").is_err());
    assert!(WorkStatus::from_str("in_progress").is_err());
}

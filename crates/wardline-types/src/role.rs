//! Staff role types

use serde::{Deserialize, Serialize};

/// Staff access levels
///
/// The set is fixed: a user's role controls which operations they may
/// invoke and is embedded in their access token at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access (audit log, all task lists)
    Admin,
    /// Attending and resident physicians
    Doctor,
    /// Nursing staff
    Nurse,
    /// Front-desk staff
    Receptionist,
    /// General hospital staff
    Staff,
}

impl Role {
    /// All roles, in privilege order
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::Staff,
    ];

    /// Whether this role sees every task list, not just its own
    pub const fn sees_all_tasks(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Doctor => write!(f, "doctor"),
            Self::Nurse => write!(f, "nurse"),
            Self::Receptionist => write!(f, "receptionist"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "nurse" => Ok(Self::Nurse),
            "receptionist" => Ok(Self::Receptionist),
            "staff" => Ok(Self::Staff),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// Error parsing a role string
#[derive(Debug, Clone)]
pub struct RoleParseError(pub String);

impl std::fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid role: {}", self.0)
    }
}

impl std::error::Error for RoleParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            let parsed = Role::from_str(&role.to_string()).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!(Role::from_str("Nurse").unwrap(), Role::Nurse);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    }

    #[test]
    fn test_only_admin_sees_all_tasks() {
        assert!(Role::Admin.sees_all_tasks());
        for role in [Role::Doctor, Role::Nurse, Role::Receptionist, Role::Staff] {
            assert!(!role.sees_all_tasks());
        }
    }
}

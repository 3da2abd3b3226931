//! Clinical status vocabularies
//!
//! String-backed enumerations stored as text columns. Each carries the
//! same Display/FromStr surface as [`crate::Role`] so handlers can parse
//! request fields and repositories can bind the canonical string form.

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Canonical string form as stored in the database
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StatusParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(StatusParseError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Whether a staff member is currently working
    PresenceStatus {
        OnDuty => "on-duty",
        OffDuty => "off-duty",
    }
}

string_enum! {
    /// What an on-duty staff member is doing
    Activity {
        Active => "active",
        Busy => "busy",
        Idle => "idle",
    }
}

string_enum! {
    /// Task urgency
    TaskPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

string_enum! {
    /// Progress of a task or care-plan step
    WorkStatus {
        Pending => "pending",
        InProgress => "in-progress",
        Completed => "completed",
    }
}

string_enum! {
    /// State of a medication schedule
    MedicationStatus {
        Scheduled => "scheduled",
        Administered => "administered",
        Overdue => "overdue",
    }
}

string_enum! {
    /// Alert severity
    AlertPriority {
        Critical => "critical",
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// Error parsing a status string
#[derive(Debug, Clone)]
pub struct StatusParseError {
    /// Which enumeration rejected the value
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl std::fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for StatusParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_presence_round_trip() {
        assert_eq!(
            PresenceStatus::from_str("on-duty").unwrap(),
            PresenceStatus::OnDuty
        );
        assert_eq!(PresenceStatus::OffDuty.as_str(), "off-duty");
    }

    #[test]
    fn test_work_status_rejects_unknown() {
        let err = WorkStatus::from_str("done").unwrap_err();
        assert_eq!(err.kind, "WorkStatus");
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let json = serde_json::to_string(&TaskPriority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Activity = serde_json::from_str("\"busy\"").unwrap();
        assert_eq!(back, Activity::Busy);
    }
}

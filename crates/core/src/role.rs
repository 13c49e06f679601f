//! Account roles recognized by the scheduling backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a user account.
///
/// The wire strings are fixed by the backend's user table and are shown
/// verbatim inside forced-logout notices, so [`fmt::Display`] renders the
/// exact backend spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "System Administrator")]
    SystemAdministrator,
    #[serde(rename = "Academic Coordinator")]
    AcademicCoordinator,
    #[serde(rename = "Lab InCharge")]
    LabInCharge,
    #[serde(rename = "Dean")]
    Dean,
    #[serde(rename = "Faculty/Staff")]
    FacultyStaff,
    #[serde(rename = "Student")]
    Student,
}

impl Role {
    /// Backend wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemAdministrator => "System Administrator",
            Self::AcademicCoordinator => "Academic Coordinator",
            Self::LabInCharge => "Lab InCharge",
            Self::Dean => "Dean",
            Self::FacultyStaff => "Faculty/Staff",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

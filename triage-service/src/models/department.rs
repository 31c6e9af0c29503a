use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hospital department a patient can be referred to.
///
/// This is the complete allow-list: any department name produced outside the
/// service (e.g. by a language model) must parse into one of these variants
/// before it is returned to a caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Department {
    Neurology,
    Cardiology,
    Gastroenterology,
    Pulmonology,
    Psychiatry,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
    Dentistry,
    Dermatology,
    #[default]
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown department: {0:?}")]
pub struct UnknownDepartment(pub String);

impl Department {
    pub const ALL: [Department; 9] = [
        Department::Neurology,
        Department::Cardiology,
        Department::Gastroenterology,
        Department::Pulmonology,
        Department::Psychiatry,
        Department::InternalMedicine,
        Department::Dentistry,
        Department::Dermatology,
        Department::GeneralMedicine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Neurology => "Neurology",
            Department::Cardiology => "Cardiology",
            Department::Gastroenterology => "Gastroenterology",
            Department::Pulmonology => "Pulmonology",
            Department::Psychiatry => "Psychiatry",
            Department::InternalMedicine => "Internal Medicine",
            Department::Dentistry => "Dentistry",
            Department::Dermatology => "Dermatology",
            Department::GeneralMedicine => "General Medicine",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the display names.
impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

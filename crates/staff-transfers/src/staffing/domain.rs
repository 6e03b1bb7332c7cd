use super::salary::{Salary, SalaryParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A staff member as supplied by the caller.
///
/// Equality is structural: two employees with the same name and the same
/// numeric salary are interchangeable for roster removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub salary: Salary,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: Salary) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    /// Convenience constructor parsing the salary from decimal text.
    pub fn parse(name: impl Into<String>, salary: &str) -> Result<Self, SalaryParseError> {
        Ok(Self::new(name, salary.parse()?))
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.salary)
    }
}

/// Observable relationship between a department's cached transfer sets and
/// its current roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheState {
    Empty,
    Fresh,
    Stale,
}

impl CacheState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Not computed",
            Self::Fresh => "Fresh",
            Self::Stale => "Stale",
        }
    }
}

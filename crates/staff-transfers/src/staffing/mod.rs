pub mod aggregation;
mod department;
pub mod domain;
pub mod enumeration;
pub mod import;
mod organization;
pub mod planner;
pub mod report;
pub mod salary;

pub use department::{Department, TransferSet, TransferSets};
pub use domain::{CacheState, Employee};
pub use enumeration::{EnumerationError, EnumerationLimit};
pub use import::{RosterImportError, RosterImporter};
pub use organization::Organization;
pub use planner::{PlanningError, TransferPlanner, TransferProposal};
pub use report::{OrganizationReport, RosterReport};
pub use salary::{Salary, SalaryParseError};

use super::aggregation::mean_of;
use super::department::{Department, TransferSet};
use super::domain::Employee;
use super::organization::Organization;
use super::salary::Salary;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningError {
    #[error("transfer sets for department '{department}' are missing or stale; recompute them first")]
    StaleTransferSets { department: String },
}

/// Moving `employees` from `source` to `target` raises both departments'
/// average salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferProposal {
    pub source: String,
    pub target: String,
    pub employees: Vec<Employee>,
    pub transfer_average: Salary,
    pub source_before: Salary,
    pub source_after: Salary,
    pub target_before: Salary,
    pub target_after: Salary,
}

#[derive(Debug, Default)]
pub struct TransferPlanner;

impl TransferPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Walks each department's fresh transfer sets in enumeration order and
    /// pairs them with every other department in organization order.
    pub fn plan(&self, organization: &Organization) -> Result<Vec<TransferProposal>, PlanningError> {
        let mut proposals = Vec::new();

        for source in organization.departments() {
            let sets = source
                .fresh_transfer_sets()
                .ok_or_else(|| PlanningError::StaleTransferSets {
                    department: source.name().to_string(),
                })?;

            for set in sets {
                if compare_means(set, source) != Ordering::Less {
                    continue;
                }

                for target in organization.departments() {
                    if std::ptr::eq(source, target) {
                        continue;
                    }
                    if let Some(proposal) = evaluate(source, target, set) {
                        proposals.push(proposal);
                    }
                }
            }

            debug!(department = source.name(), "evaluated transfer sets");
        }

        info!(proposals = proposals.len(), "transfer planning complete");
        Ok(proposals)
    }
}

fn evaluate(source: &Department, target: &Department, set: &TransferSet) -> Option<TransferProposal> {
    if compare_means(set, target) != Ordering::Greater {
        return None;
    }

    let source_after = mean_of(remaining_salaries(source.roster(), set.members()));
    let target_after = mean_of(
        target
            .roster()
            .iter()
            .chain(set.members())
            .map(|employee| employee.salary),
    );

    Some(TransferProposal {
        source: source.name().to_string(),
        target: target.name().to_string(),
        employees: set.members().to_vec(),
        transfer_average: set.average_salary(),
        source_before: source.average_salary(),
        source_after,
        target_before: target.average_salary(),
        target_after,
    })
}

/// Unrounded comparison of the set's mean salary with the department's.
fn compare_means(set: &TransferSet, department: &Department) -> Ordering {
    set.total_salary().cmp_mean(
        set.len() as u128,
        department.total_salary(),
        department.len() as u128,
    )
}

/// Salaries left behind once `moved` leaves `roster`, removing one matching
/// occurrence per moved employee.
fn remaining_salaries(roster: &[Employee], moved: &[Employee]) -> Vec<Salary> {
    let mut remaining: Vec<&Employee> = roster.iter().collect();
    for employee in moved {
        if let Some(index) = remaining.iter().position(|entry| *entry == employee) {
            remaining.remove(index);
        }
    }
    remaining.into_iter().map(|employee| employee.salary).collect()
}

use staff_transfers::staffing::{RosterReport, TransferProposal};

const NAME_WIDTH: usize = 30;
const DEPARTMENT_WIDTH: usize = 15;
const SALARY_WIDTH: usize = 8;

pub(crate) fn roster_lines(report: &RosterReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.employees.len() + 3);
    lines.push(format!(
        "{:<NAME_WIDTH$}{:<DEPARTMENT_WIDTH$}{:<SALARY_WIDTH$}",
        "Name", "Department", "Salary"
    ));
    lines.push("-".repeat(NAME_WIDTH + DEPARTMENT_WIDTH + SALARY_WIDTH));

    for employee in &report.employees {
        lines.push(format!(
            "{:<NAME_WIDTH$}{:<DEPARTMENT_WIDTH$}{:>SALARY_WIDTH$}",
            employee.name, employee.department, employee.salary
        ));
    }

    lines.push(format!(
        "{:<width$}{:>SALARY_WIDTH$}",
        "Average salary",
        report.average_salary,
        width = NAME_WIDTH + DEPARTMENT_WIDTH
    ));
    lines
}

pub(crate) fn proposal_lines(proposals: &[TransferProposal]) -> Vec<String> {
    if proposals.is_empty() {
        return vec!["No transfer raises both departments' average salary".to_string()];
    }

    proposals
        .iter()
        .map(|proposal| {
            let names: Vec<&str> = proposal
                .employees
                .iter()
                .map(|employee| employee.name.as_str())
                .collect();
            format!(
                "- {} -> {}: {} (avg {}) | {} {} -> {} | {} {} -> {}",
                proposal.source,
                proposal.target,
                names.join(", "),
                proposal.transfer_average,
                proposal.source,
                proposal.source_before,
                proposal.source_after,
                proposal.target,
                proposal.target_before,
                proposal.target_after
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use staff_transfers::staffing::{Department, Employee};

    fn employee(name: &str, salary: &str) -> Employee {
        Employee::parse(name, salary).expect("valid salary")
    }

    #[test]
    fn roster_lines_use_fixed_columns() {
        let mut department = Department::new("Engineering");
        department.add_employee(employee("Ann", "50.00"));
        department.add_employee(employee("Bob", "90.00"));

        let lines = roster_lines(&RosterReport::build(&department));

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert_eq!(lines[1].len(), 53);
        assert_eq!(
            lines[2],
            format!("{:<30}{:<15}{:>8}", "Ann", "Engineering", "50.00")
        );
        assert!(lines[4].starts_with("Average salary"));
        assert!(lines[4].ends_with("   70.00"));
        assert_eq!(lines[4].len(), 53);
    }

    #[test]
    fn empty_plan_says_so() {
        assert_eq!(
            proposal_lines(&[]),
            vec!["No transfer raises both departments' average salary".to_string()]
        );
    }

    #[test]
    fn proposal_lines_describe_both_departments() {
        let proposal = TransferProposal {
            source: "Engineering".to_string(),
            target: "Support".to_string(),
            employees: vec![employee("Bob", "60.00")],
            transfer_average: "60.00".parse().expect("valid"),
            source_before: "80.00".parse().expect("valid"),
            source_after: "100.00".parse().expect("valid"),
            target_before: "45.00".parse().expect("valid"),
            target_after: "50.00".parse().expect("valid"),
        };

        assert_eq!(
            proposal_lines(&[proposal]),
            vec![
                "- Engineering -> Support: Bob (avg 60.00) | Engineering 80.00 -> 100.00 | Support 45.00 -> 50.00"
                    .to_string()
            ]
        );
    }
}

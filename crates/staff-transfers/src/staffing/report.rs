use super::department::Department;
use super::domain::CacheState;
use super::organization::Organization;
use super::salary::Salary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeLine {
    pub name: String,
    pub department: String,
    pub salary: Salary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub department: String,
    pub employees: Vec<EmployeeLine>,
    pub headcount: usize,
    pub total_salary: Salary,
    pub average_salary: Salary,
    pub transfer_sets: CacheState,
    pub transfer_set_label: &'static str,
}

impl RosterReport {
    pub fn build(department: &Department) -> Self {
        let employees = department
            .roster()
            .iter()
            .map(|employee| EmployeeLine {
                name: employee.name.clone(),
                department: department.name().to_string(),
                salary: employee.salary,
            })
            .collect();
        let cache_state = department.cache_state();

        Self {
            department: department.name().to_string(),
            employees,
            headcount: department.len(),
            total_salary: department.total_salary(),
            average_salary: department.average_salary(),
            transfer_sets: cache_state,
            transfer_set_label: cache_state.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationReport {
    pub departments: Vec<RosterReport>,
    pub headcount: usize,
}

impl OrganizationReport {
    pub fn build(organization: &Organization) -> Self {
        Self {
            departments: organization
                .departments()
                .iter()
                .map(RosterReport::build)
                .collect(),
            headcount: organization.headcount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staffing::domain::Employee;

    #[test]
    fn roster_report_summarizes_department() {
        let mut department = Department::new("Sales");
        department.add_employee(Employee::parse("Ann", "50.00").expect("valid"));
        department.add_employee(Employee::parse("Bob", "70.005").expect("valid"));

        let report = RosterReport::build(&department);
        assert_eq!(report.headcount, 2);
        assert_eq!(report.employees[1].department, "Sales");
        assert_eq!(report.total_salary.to_string(), "120.005");
        assert_eq!(report.average_salary.to_string(), "60.00");
        assert_eq!(report.transfer_sets, CacheState::Empty);
    }

    #[test]
    fn organization_report_serializes_salaries_as_strings() {
        let mut organization = Organization::new();
        organization
            .department_entry("Sales")
            .add_employee(Employee::parse("Ann", "50.00").expect("valid"));

        let report = OrganizationReport::build(&organization);
        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["headcount"], 1);
        assert_eq!(json["departments"][0]["average_salary"], "50.00");
        assert_eq!(json["departments"][0]["transfer_sets"], "empty");
    }
}

mod parser;

use crate::staffing::domain::Employee;
use crate::staffing::organization::Organization;
use crate::staffing::salary::SalaryParseError;
use std::io::Read;
use std::path::Path;
use tracing::info;

use parser::RosterRecord;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidSalary {
        line: u64,
        source: SalaryParseError,
    },
    EmptyName {
        line: u64,
    },
    EmptyDepartment {
        line: u64,
    },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster file: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::InvalidSalary { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
            RosterImportError::EmptyName { line } => {
                write!(f, "line {}: employee name is empty", line)
            }
            RosterImportError::EmptyDepartment { line } => {
                write!(f, "line {}: department is empty", line)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidSalary { source, .. } => Some(source),
            RosterImportError::EmptyName { .. } | RosterImportError::EmptyDepartment { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads an [`Organization`] from a `Name,Department,Salary` CSV export.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Organization, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Organization, RosterImportError> {
        let mut organization = Organization::new();

        for record in parser::parse_records(reader)? {
            apply_record(record, &mut organization)?;
        }

        info!(
            departments = organization.len(),
            employees = organization.headcount(),
            "roster imported"
        );
        Ok(organization)
    }
}

fn apply_record(
    record: RosterRecord,
    organization: &mut Organization,
) -> Result<(), RosterImportError> {
    let RosterRecord {
        line,
        name,
        department,
        salary,
    } = record;

    if name.is_empty() {
        return Err(RosterImportError::EmptyName { line });
    }
    if department.is_empty() {
        return Err(RosterImportError::EmptyDepartment { line });
    }

    let employee = Employee::parse(name, &salary)
        .map_err(|source| RosterImportError::InvalidSalary { line, source })?;
    organization.department_entry(&department).add_employee(employee);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn groups_employees_by_department_in_file_order() {
        let csv = "Name,Department,Salary\nAnn,Sales,50.00\nBob,Support,60.00\nCid,Sales,70.00\n";
        let organization = RosterImporter::from_reader(Cursor::new(csv)).expect("imports");

        assert_eq!(organization.len(), 2);
        let sales = organization.department("Sales").expect("sales present");
        let names: Vec<&str> = sales.roster().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cid"]);
        assert_eq!(sales.average_salary().to_string(), "60.00");
    }

    #[test]
    fn rejects_bad_salary_with_line_number() {
        let csv = "Name,Department,Salary\nAnn,Sales,50.00\nBob,Sales,-1\n";
        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("negative salary");

        match err {
            RosterImportError::InvalidSalary { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, SalaryParseError::Negative(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_missing_name_and_department() {
        let missing_name = "Name,Department,Salary\n,Sales,50.00\n";
        assert!(matches!(
            RosterImporter::from_reader(Cursor::new(missing_name)),
            Err(RosterImportError::EmptyName { line: 2 })
        ));

        let missing_department = "Name,Department,Salary\nAnn,,50.00\n";
        assert!(matches!(
            RosterImporter::from_reader(Cursor::new(missing_department)),
            Err(RosterImportError::EmptyDepartment { line: 2 })
        ));
    }

    #[test]
    fn ragged_rows_surface_csv_errors() {
        let csv = "Name,Department,Salary\nAnn,Sales\n";
        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("ragged row");
        assert!(matches!(err, RosterImportError::Csv(_)));
        assert!(err.to_string().starts_with("invalid roster CSV data"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RosterImporter::from_path("/nonexistent/roster.csv").expect_err("missing file");
        assert!(matches!(err, RosterImportError::Io(_)));
    }
}

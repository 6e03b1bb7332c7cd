use super::department::Department;
use super::enumeration::{EnumerationError, EnumerationLimit};
use tracing::info;

/// Departments in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct Organization {
    departments: Vec<Department>,
}

impl Organization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| department.name() == name)
    }

    pub fn department_mut(&mut self, name: &str) -> Option<&mut Department> {
        self.departments
            .iter_mut()
            .find(|department| department.name() == name)
    }

    /// Returns the named department, creating an empty one at the end if needed.
    pub fn department_entry(&mut self, name: &str) -> &mut Department {
        let index = match self
            .departments
            .iter()
            .position(|department| department.name() == name)
        {
            Some(index) => index,
            None => {
                self.departments.push(Department::new(name));
                self.departments.len() - 1
            }
        };
        &mut self.departments[index]
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn headcount(&self) -> usize {
        self.departments.iter().map(Department::len).sum()
    }

    /// Recomputes transfer sets department by department, stopping at the first
    /// roster over `limit`.
    pub fn recompute_transfer_sets(
        &mut self,
        limit: &EnumerationLimit,
    ) -> Result<usize, EnumerationError> {
        let mut total = 0;
        for department in &mut self.departments {
            total += department.recompute_transfer_sets(limit)?.len();
        }
        info!(
            departments = self.departments.len(),
            transfer_sets = total,
            "transfer sets ready"
        );
        Ok(total)
    }
}

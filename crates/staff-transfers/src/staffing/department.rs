use super::aggregation;
use super::domain::{CacheState, Employee};
use super::enumeration::{enumerate_within, EnumerationError, EnumerationLimit};
use super::salary::Salary;
use serde::Serialize;
use tracing::debug;

/// A candidate group of employees considered as a unit for reassignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSet {
    members: Vec<Employee>,
}

impl TransferSet {
    pub fn new(members: Vec<Employee>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Employee] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, employee: &Employee) -> bool {
        self.members.contains(employee)
    }

    pub fn total_salary(&self) -> Salary {
        aggregation::total_salary(&self.members)
    }

    pub fn average_salary(&self) -> Salary {
        aggregation::average_salary(&self.members)
    }

    pub fn names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|employee| employee.name.as_str())
            .collect()
    }
}

/// Transfer sets derived from a roster, stamped with the roster generation
/// they were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSets {
    generation: u64,
    sets: Vec<TransferSet>,
}

impl TransferSets {
    pub fn new(generation: u64, sets: Vec<TransferSet>) -> Self {
        Self { generation, sets }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sets(&self) -> &[TransferSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferSet> {
        self.sets.iter()
    }
}

impl<'a> IntoIterator for &'a TransferSets {
    type Item = &'a TransferSet;
    type IntoIter = std::slice::Iter<'a, TransferSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

/// A named department owning an ordered roster.
///
/// Every roster change bumps `generation`. Cached transfer sets are never
/// invalidated implicitly; callers run [`Department::recompute_transfer_sets`]
/// after changing the roster and can check [`Department::cache_state`] to see
/// whether the cache still matches.
#[derive(Debug, Clone)]
pub struct Department {
    name: String,
    roster: Vec<Employee>,
    generation: u64,
    transfer_sets: Option<TransferSets>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
            generation: 0,
            transfer_sets: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Appends without checking for duplicates.
    pub fn add_employee(&mut self, employee: Employee) {
        self.roster.push(employee);
        self.generation += 1;
    }

    /// Removes the first entry equal to `employee`. Returns `false` and leaves
    /// the roster untouched when there is no such entry.
    pub fn remove_employee(&mut self, employee: &Employee) -> bool {
        match self.roster.iter().position(|entry| entry == employee) {
            Some(index) => {
                self.roster.remove(index);
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    pub fn average_salary(&self) -> Salary {
        aggregation::average_salary(&self.roster)
    }

    pub fn total_salary(&self) -> Salary {
        aggregation::total_salary(&self.roster)
    }

    /// Enumerates every non-empty subset of the current roster and caches it.
    ///
    /// On error the previous cache, if any, is kept.
    pub fn recompute_transfer_sets(
        &mut self,
        limit: &EnumerationLimit,
    ) -> Result<&TransferSets, EnumerationError> {
        let sets = enumerate_within(&self.roster, limit)?
            .into_iter()
            .map(TransferSet::new)
            .collect();
        let generation = self.generation;
        debug!(department = %self.name, generation, "recomputed transfer sets");

        Ok(self
            .transfer_sets
            .insert(TransferSets::new(generation, sets)))
    }

    /// Cached transfer sets, which may be stale.
    pub fn transfer_sets(&self) -> Option<&TransferSets> {
        self.transfer_sets.as_ref()
    }

    /// Cached transfer sets only if they match the current roster.
    pub fn fresh_transfer_sets(&self) -> Option<&TransferSets> {
        self.transfer_sets
            .as_ref()
            .filter(|sets| sets.generation == self.generation)
    }

    pub fn replace_transfer_sets(&mut self, sets: TransferSets) {
        self.transfer_sets = Some(sets);
    }

    pub fn clear_transfer_sets(&mut self) -> Option<TransferSets> {
        self.transfer_sets.take()
    }

    pub fn cache_state(&self) -> CacheState {
        match &self.transfer_sets {
            None => CacheState::Empty,
            Some(sets) if sets.generation == self.generation => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }
}

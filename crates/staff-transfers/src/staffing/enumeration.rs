//! Exhaustive enumeration of candidate transfer sets.
//!
//! The output is the power set of the input minus the empty set, built
//! incrementally: each element first contributes its singleton, then extends
//! every subset that existed before that element was visited. The resulting
//! order for `[A, B, C]` is `A, B, AB, C, AC, BC, ABC`.
//!
//! Work and memory grow as Θ(n·2ⁿ). Rosters of around twenty people are the
//! practical ceiling, which is why callers go through [`enumerate_within`].

use tracing::debug;

/// Default cap on how many elements may be enumerated.
pub const DEFAULT_MAX_ROSTER_SIZE: usize = 20;

/// Hard ceiling accepted by [`EnumerationLimit::new`].
///
/// Every subset clones its members, so 24 elements already materialize about
/// 2·10⁸ employee copies.
pub const MAX_SUPPORTED_ROSTER_SIZE: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerationError {
    #[error(
        "roster of {size} employees exceeds the enumeration limit of {limit} ({subsets} transfer sets would be generated)"
    )]
    RosterTooLarge {
        size: usize,
        limit: usize,
        subsets: String,
    },
}

/// Upper bound on the input size accepted before enumeration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationLimit {
    max_roster_size: usize,
}

impl EnumerationLimit {
    /// Returns `None` when `max_roster_size` is zero or above
    /// [`MAX_SUPPORTED_ROSTER_SIZE`].
    pub fn new(max_roster_size: usize) -> Option<Self> {
        if (1..=MAX_SUPPORTED_ROSTER_SIZE).contains(&max_roster_size) {
            Some(Self { max_roster_size })
        } else {
            None
        }
    }

    pub fn max_roster_size(&self) -> usize {
        self.max_roster_size
    }

    pub fn check(&self, size: usize) -> Result<(), EnumerationError> {
        if size <= self.max_roster_size {
            return Ok(());
        }

        let subsets = subset_count(size)
            .map(|count| count.to_string())
            .unwrap_or_else(|| format!("2^{size} - 1"));
        Err(EnumerationError::RosterTooLarge {
            size,
            limit: self.max_roster_size,
            subsets,
        })
    }
}

impl Default for EnumerationLimit {
    fn default() -> Self {
        Self {
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
        }
    }
}

/// Number of non-empty subsets of `n` elements, `None` if it overflows.
pub fn subset_count(n: usize) -> Option<usize> {
    let bits = u32::try_from(n).ok()?;
    1usize.checked_shl(bits).map(|total| total - 1)
}

/// Every non-empty subset of `items`, in incremental construction order.
///
/// Elements are treated by position, so equal values at different positions
/// yield distinct subsets.
pub fn enumerate_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut subsets: Vec<Vec<T>> = Vec::with_capacity(subset_count(items.len()).unwrap_or(0));

    for item in items {
        // Only subsets that existed before this element are extended.
        let existing = subsets.len();
        subsets.push(vec![item.clone()]);

        for index in 0..existing {
            let mut extended = Vec::with_capacity(subsets[index].len() + 1);
            extended.extend_from_slice(&subsets[index]);
            extended.push(item.clone());
            subsets.push(extended);
        }
    }

    subsets
}

/// Like [`enumerate_subsets`], but refuses inputs longer than `limit`.
pub fn enumerate_within<T: Clone>(
    items: &[T],
    limit: &EnumerationLimit,
) -> Result<Vec<Vec<T>>, EnumerationError> {
    limit.check(items.len())?;
    let subsets = enumerate_subsets(items);
    debug!(
        elements = items.len(),
        subsets = subsets.len(),
        "enumerated transfer sets"
    );
    Ok(subsets)
}

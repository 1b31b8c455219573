//! Stable first-occurrence deduplication.

use std::{collections::HashSet, hash::Hash};

use crate::metadata::StepParameter;

/// Keeps the first item for every key, preserving the order of first
/// occurrences.
///
/// ```rust
/// use stepgen_core::dedupe::unique_by;
///
/// let names = unique_by(["a", "b", "a", "c"], |s| *s);
/// assert_eq!(names, vec!["a", "b", "c"]);
/// ```
pub fn unique_by<T, K, I, F>(items: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Collapses parameters declared more than once to their first declaration.
pub fn dedupe_parameters(parameters: &[StepParameter]) -> Vec<StepParameter> {
    unique_by(parameters.iter().cloned(), |parameter| parameter.name.clone())
}

//! Immutable action weight tables.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    #[error("Action {0:?} is weighted more than once")]
    DuplicateAction(&'static str),
}

/// Relative weights for the actions of one scenario.
///
/// Weights are not normalized. A weight of zero keeps the action in the table
/// but it is never handed to the engine. Two tables are equal when they map
/// the same names to the same weights, whatever the order.
#[derive(Debug, Clone)]
pub struct TaskWeights {
    entries: Vec<(&'static str, u32)>,
}

impl TaskWeights {
    /// Builds a table from `(action name, weight)` pairs.
    pub fn new(
        entries: impl IntoIterator<Item = (&'static str, u32)>,
    ) -> Result<Self, WeightsError> {
        let mut collected: Vec<(&'static str, u32)> = Vec::new();
        for (name, weight) in entries {
            if collected.iter().any(|(existing, _)| *existing == name) {
                return Err(WeightsError::DuplicateAction(name));
            }
            collected.push((name, weight));
        }
        Ok(Self { entries: collected })
    }

    /// Weight of `name`, or `None` when the action is not in the table.
    pub fn weight(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, weight)| *weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Actions with a non-zero weight.
    pub fn enabled(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.iter().filter(|(_, weight)| *weight > 0)
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, weight)| u64::from(*weight)).sum()
    }
}

impl PartialEq for TaskWeights {
    fn eq(&self, other: &Self) -> bool {
        // Names are unique, so equal length plus matching lookups is a bijection.
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, weight)| other.weight(name) == Some(weight))
    }
}

impl Eq for TaskWeights {}

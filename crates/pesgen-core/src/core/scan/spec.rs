use super::job::ScanJob;
use super::order::InteractionOrder;
use super::range::{RangeError, ScanRange};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScanError {
    #[error("No {order} scans declared: at least one type index is required when the section is present")]
    Empty { order: InteractionOrder },

    #[error("{order} scan '{field}' has {found} entries but 'types' has {expected}")]
    LengthMismatch {
        order: InteractionOrder,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{order} type {type_index} is scanned more than once")]
    DuplicateTypeIndex {
        order: InteractionOrder,
        type_index: u32,
    },

    #[error("Invalid range for {order} type {type_index}: {source}")]
    InvalidRange {
        order: InteractionOrder,
        type_index: u32,
        #[source]
        source: RangeError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanEntry {
    pub type_index: u32,
    pub range: ScanRange,
}

/// All scans declared for one interaction order, in declaration order.
///
/// Construction enforces that the parallel sequences line up, that every range is
/// well-formed and that no type index is scanned twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSpec {
    order: InteractionOrder,
    entries: Vec<ScanEntry>,
}

impl ScanSpec {
    pub fn from_parallel(
        order: InteractionOrder,
        types: &[u32],
        start: &[f64],
        stop: &[f64],
        step: &[f64],
    ) -> Result<Self, ScanError> {
        if types.is_empty() && start.is_empty() && stop.is_empty() && step.is_empty() {
            return Err(ScanError::Empty { order });
        }

        let expected = types.len();
        for (field, len) in [
            ("start", start.len()),
            ("stop", stop.len()),
            ("step", step.len()),
        ] {
            if len != expected {
                return Err(ScanError::LengthMismatch {
                    order,
                    field,
                    expected,
                    found: len,
                });
            }
        }

        let mut seen = HashSet::with_capacity(expected);
        let mut entries = Vec::with_capacity(expected);
        for (i, &type_index) in types.iter().enumerate() {
            if !seen.insert(type_index) {
                return Err(ScanError::DuplicateTypeIndex { order, type_index });
            }
            let range = ScanRange::new(start[i], stop[i], step[i]).map_err(|source| {
                ScanError::InvalidRange {
                    order,
                    type_index,
                    source,
                }
            })?;
            entries.push(ScanEntry { type_index, range });
        }

        Ok(Self { order, entries })
    }

    pub fn order(&self) -> InteractionOrder {
        self.order
    }

    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.type_index)
    }

    /// Replaces the step of every entry, e.g. to get a quick coarse estimate of run time.
    pub fn with_uniform_step(&self, step: f64) -> Result<Self, ScanError> {
        let entries = self
            .entries
            .iter()
            .map(|e| {
                let range = e.range.with_step(step).map_err(|source| ScanError::InvalidRange {
                    order: self.order,
                    type_index: e.type_index,
                    source,
                })?;
                Ok(ScanEntry {
                    type_index: e.type_index,
                    range,
                })
            })
            .collect::<Result<Vec<_>, ScanError>>()?;
        Ok(Self {
            order: self.order,
            entries,
        })
    }

    pub fn jobs(&self) -> impl Iterator<Item = ScanJob> + '_ {
        self.entries
            .iter()
            .map(|e| ScanJob::new(self.order, e.type_index, e.range))
    }
}

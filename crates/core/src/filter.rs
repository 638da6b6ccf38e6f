//! Cut-based filtering of the reference dataset.

use crate::dataset::{Cut, Diamond, ReferenceDataset};
use std::collections::BTreeSet;
use tokio::sync::watch;
use tracing::{debug, warn};

/// The set of cut grades currently selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    cuts: BTreeSet<Cut>,
}

impl FilterCriteria {
    /// Criteria that select nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Criteria that select every grade.
    pub fn all() -> Self {
        Cut::ALL.into_iter().collect()
    }

    /// Build criteria from raw UI labels. Unknown labels select nothing.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .filter_map(|label| match label.as_ref().parse::<Cut>() {
                Ok(cut) => Some(cut),
                Err(e) => {
                    warn!("Ignoring filter label: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, cut: Cut) -> bool {
        self.cuts.contains(&cut)
    }

    pub fn set(&mut self, cut: Cut, selected: bool) {
        if selected {
            self.cuts.insert(cut);
        } else {
            self.cuts.remove(&cut);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cut> + '_ {
        self.cuts.iter().copied()
    }
}

impl FromIterator<Cut> for FilterCriteria {
    fn from_iter<T: IntoIterator<Item = Cut>>(iter: T) -> Self {
        Self {
            cuts: iter.into_iter().collect(),
        }
    }
}

/// Rows of the reference dataset matching the criteria, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Diamond>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a Diamond] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Diamond> + '_ {
        self.rows.iter().copied()
    }
}

/// Owns the current criteria and publishes every change.
///
/// Readers either call [`StaticFilter::filtered_view`] on demand or
/// [`StaticFilter::subscribe`] to be told when the criteria change.
#[derive(Debug)]
pub struct StaticFilter {
    dataset:  ReferenceDataset,
    criteria: watch::Sender<FilterCriteria>,
}

impl StaticFilter {
    pub fn new(dataset: ReferenceDataset, initial: FilterCriteria) -> Self {
        Self {
            dataset,
            criteria: watch::Sender::new(initial),
        }
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria.borrow().clone()
    }

    /// Register for "filter changed" notifications.
    pub fn subscribe(&self) -> watch::Receiver<FilterCriteria> {
        self.criteria.subscribe()
    }

    /// Replace the criteria and notify subscribers.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        debug!(?criteria, "Filter criteria replaced");
        self.criteria.send_replace(criteria);
    }

    /// Select or deselect one grade and notify subscribers if anything changed.
    pub fn toggle(&self, cut: Cut, selected: bool) {
        let changed = self.criteria.send_if_modified(|criteria| {
            if criteria.contains(cut) == selected {
                return false;
            }
            criteria.set(cut, selected);
            true
        });
        if changed {
            debug!(%cut, selected, "Filter criteria toggled");
        }
    }

    /// Rows whose cut is selected, recomputed on every call.
    pub fn filtered_view(&self) -> FilteredView<'_> {
        let criteria = self.criteria.borrow();
        FilteredView {
            rows: self
                .dataset
                .rows()
                .iter()
                .filter(|d| criteria.contains(d.cut))
                .collect(),
        }
    }
}

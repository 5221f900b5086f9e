//! Ordered candidate list backing the selection table

use super::entities::Candidate;
use crate::resource::ResourceFile;
use serde::Serialize;

/// Ranked candidates for one domain, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateList {
    items: Vec<Candidate>,
}

impl CandidateList {
    /// Wrap an already ordered list
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn get(&self, row: usize) -> Option<&Candidate> {
        self.items.get(row)
    }

    pub fn get_mut(&mut self, row: usize) -> Option<&mut Candidate> {
        self.items.get_mut(row)
    }

    /// Set the include flag of the candidate at `row`.
    ///
    /// Returns `false` when there is no such row.
    pub fn toggle(&mut self, row: usize, value: bool) -> bool {
        match self.items.get_mut(row) {
            Some(candidate) => {
                candidate.set_included(value);
                true
            }
            None => false,
        }
    }

    /// Included candidates, in list order
    pub fn collect_included(&self) -> Vec<&Candidate> {
        self.items.iter().filter(|c| c.is_included()).collect()
    }

    /// Files of the included candidates, in list order
    pub fn included_files(&self) -> Vec<ResourceFile> {
        self.collect_included()
            .into_iter()
            .map(|c| c.file().clone())
            .collect()
    }

    pub fn any_included(&self) -> bool {
        self.items.iter().any(Candidate::is_included)
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

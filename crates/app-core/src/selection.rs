//! Active-selection set: which catalog bodies are currently displayed.
//!
//! Membership is the only state. Anything derived from a selection must be a
//! function of membership alone, so consumers always re-filter the catalog in
//! catalog order rather than remembering the order of toggles.

use crate::catalog::{Body, CATALOG};
use fnv::FnvHashSet;

#[derive(Clone, Debug, Default)]
pub struct Selection {
    active: FnvHashSet<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for `name`; returns true if the body is now active.
    pub fn toggle(&mut self, name: &'static str) -> bool {
        if self.active.remove(name) {
            false
        } else {
            self.active.insert(name);
            true
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active bodies with their catalog indices, in catalog order.
    pub fn active_bodies(&self) -> Vec<(usize, &'static Body)> {
        CATALOG
            .iter()
            .enumerate()
            .filter(|(_, b)| self.active.contains(b.name))
            .collect()
    }
}

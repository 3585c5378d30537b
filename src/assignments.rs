use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    error::{MultiWallError, Result},
    warn,
};

/// Image chosen for each monitor, keyed by monitor index. Unassigned
/// monitors render black.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    slots: BTreeMap<usize, PathBuf>,
    monitor_count: usize,
}

impl Assignments {
    pub fn new(monitor_count: usize) -> Self {
        Self {
            slots: BTreeMap::new(),
            monitor_count,
        }
    }

    /// Rebuilds assignments from a list saved for a previous session. A list
    /// saved for a different number of monitors is discarded entirely.
    pub fn restore(saved: &[Option<PathBuf>], monitor_count: usize) -> Self {
        let mut assignments = Self::new(monitor_count);

        if saved.len() != monitor_count {
            if !saved.is_empty() {
                warn!(
                    "[MULTIWALL][ASSIGN] Saved list has {} entr(ies) for {} monitor(s); starting over",
                    saved.len(),
                    monitor_count
                );
            }
            return assignments;
        }

        for (index, path) in saved.iter().enumerate() {
            if let Some(path) = path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
                assignments.slots.insert(index, path.clone());
            }
        }

        assignments
    }

    pub fn assign(&mut self, index: usize, path: impl Into<PathBuf>) -> Result<()> {
        self.check_index(index)?;

        let path = path.into();
        if path.as_os_str().is_empty() {
            self.slots.remove(&index);
        } else {
            self.slots.insert(index, path);
        }
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.slots.remove(&index);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.slots.get(&index).map(PathBuf::as_path)
    }

    pub fn monitor_count(&self) -> usize {
        self.monitor_count
    }

    /// One slot per monitor, in index order, for the settings store.
    pub fn saved(&self) -> Vec<Option<PathBuf>> {
        (0..self.monitor_count)
            .map(|index| self.slots.get(&index).cloned())
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.monitor_count {
            return Err(MultiWallError::MonitorIndex {
                index,
                count: self.monitor_count,
            });
        }
        Ok(())
    }
}

//! The record store: an ordered in-memory catalogue loaded from and flushed
//! to a tab-delimited text file, with a single-level undo history for
//! deletions.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::{Filter, Treasure};

pub(crate) mod file;

/// The one store instance behind a running catalogue session.
///
/// The collection is an ordered set, so iteration, display, and save order
/// are deterministic (catalogue number first). Structurally identical records
/// collapse to one entry. Nothing persists until [`DataStore::save`] is
/// called explicitly.
pub struct DataStore {
    path: PathBuf,
    treasures: BTreeSet<Treasure>,
    undo_history: Vec<Treasure>,
}

impl DataStore {
    /// Creates an empty store backed by the given file path. Call
    /// [`DataStore::load`] to populate it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            treasures: BTreeSet::new(),
            undo_history: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.treasures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treasures.is_empty()
    }

    pub fn has_undo(&self) -> bool {
        !self.undo_history.is_empty()
    }

    /// All records in catalogue-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Treasure> {
        self.treasures.iter()
    }
}

/// Persistence.
impl DataStore {
    /// Reads the backing file, inserting one record per accepted line.
    ///
    /// A malformed line aborts the load with an error naming the line; rows
    /// accepted before it stay in the collection. Returns the number of lines
    /// accepted.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let input = BufReader::new(File::open(&self.path)?);

        let mut accepted = 0;
        for (index, line) in input.lines().enumerate() {
            let treasure = file::parse_line(&line?, index + 1)?;
            self.treasures.insert(treasure);
            accepted += 1;
        }

        tracing::info!(
            path = %self.path.display(),
            records = accepted,
            "catalogue loaded"
        );
        Ok(accepted)
    }

    /// Rewrites the backing file with the current collection, one record per
    /// line. No temp-file discipline: contents after a failed write are
    /// undefined.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut output = BufWriter::new(File::create(&self.path)?);

        for treasure in &self.treasures {
            writeln!(output, "{}", file::encode_line(treasure))?;
        }
        output.flush()?;

        tracing::info!(
            path = %self.path.display(),
            records = self.treasures.len(),
            "catalogue saved"
        );
        Ok(())
    }
}

/// Point lookups. Uniqueness of names and numbers is not enforced, so these
/// return the first match in catalogue order.
impl DataStore {
    pub fn find_by_name(&self, name: &str) -> Option<&Treasure> {
        self.treasures.iter().find(|t| t.name.as_str() == name)
    }

    pub fn find_by_number(&self, number: &str) -> Option<&Treasure> {
        self.treasures
            .iter()
            .find(|t| t.catalogue_number.as_str() == number)
    }
}

/// Mutations. Validation already happened when the [`Treasure`] was built.
impl DataStore {
    /// Inserts a record. Returns `false` when a structurally identical record
    /// was already present (a silent no-op under set semantics).
    pub fn create(&mut self, treasure: Treasure) -> bool {
        self.treasures.insert(treasure)
    }

    /// Replaces `old` with `new`. Removal of an absent `old` is a no-op and
    /// `new` is inserted regardless, so callers should pass a record obtained
    /// from a prior lookup or selection.
    pub fn update(&mut self, old: &Treasure, new: Treasure) {
        self.treasures.remove(old);
        self.treasures.insert(new);
    }

    /// Removes a record, recording it for undo. Returns `false` (and records
    /// nothing) when the record was not present.
    pub fn delete(&mut self, treasure: &Treasure) -> bool {
        if self.treasures.remove(treasure) {
            self.undo_history.push(treasure.clone());
            true
        } else {
            false
        }
    }

    /// Reverses the most recent deletion and returns the restored record, or
    /// `None` when there is nothing to undo. One deletion per call.
    pub fn undo(&mut self) -> Option<Treasure> {
        let restored = self.undo_history.pop()?;
        self.treasures.insert(restored.clone());
        Some(restored)
    }
}

/// Read-side projections.
impl DataStore {
    /// Records matching the filter, in catalogue-number order.
    pub fn filtered(&self, filter: &Filter) -> Vec<&Treasure> {
        self.treasures.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Distinct category values, sorted, for populating filter selectors.
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> =
            self.treasures.iter().map(|t| t.category.as_str()).collect();
        distinct.into_iter().map(str::to_owned).collect()
    }

    /// Distinct country values, sorted.
    pub fn countries(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> =
            self.treasures.iter().map(|t| t.country.as_str()).collect();
        distinct.into_iter().map(str::to_owned).collect()
    }
}

//! Per-conversation game state

use super::catalog::Catalog;
use super::record::Record;

/// Progress of one guessing game (Entity)
///
/// Candidates are positions into the catalog's record table, kept in
/// table order. Holding positions rather than records means the state can
/// only ever describe a subset of the table and cannot alter it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    candidates: Vec<usize>,
    cursor: usize,
}

impl GameState {
    /// A fresh game over every record of `catalog`
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            candidates: (0..catalog.records().len()).collect(),
            cursor: 0,
        }
    }

    /// Index of the next question to ask
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Remaining candidates, resolved against `catalog`
    pub fn candidates<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Record> + 'a {
        self.candidates
            .iter()
            .filter_map(move |&i| catalog.records().get(i))
    }

    pub(crate) fn restore(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }

    /// Keep only candidates satisfying `keep`, then move to the next question.
    pub(crate) fn narrow(&mut self, catalog: &Catalog, mut keep: impl FnMut(&Record) -> bool) {
        let records = catalog.records();
        self.candidates
            .retain(|&i| records.get(i).is_some_and(&mut keep));
        self.cursor += 1;
    }
}

//! Index-level search state shared by the backtracking and greedy phases.
//!
//! Participants are addressed by their position in the eligible list;
//! conflicts are resolved once into a dense matrix so the inner loops
//! never touch strings.

use crate::models::{ConflictModel, PlacementObserver, Strategy};

/// Dense symmetric conflict matrix over eligible indices.
pub(crate) struct LocalConflicts {
    n: usize,
    cells: Vec<bool>,
}

impl LocalConflicts {
    pub(crate) fn build(ids: &[&str], model: &ConflictModel) -> Self {
        let n = ids.len();
        let mut cells = vec![false; n * n];
        if !model.is_empty() {
            for i in 0..n {
                for j in (i + 1)..n {
                    if model.has_conflict(ids[i], ids[j]) {
                        cells[i * n + j] = true;
                        cells[j * n + i] = true;
                    }
                }
            }
        }
        Self { n, cells }
    }

    #[inline]
    pub(crate) fn get(&self, a: usize, b: usize) -> bool {
        self.cells[a * self.n + b]
    }

    /// Members of `group` that conflict with `p`.
    pub(crate) fn count_in(&self, p: usize, group: &[usize]) -> usize {
        group.iter().filter(|&&m| self.get(p, m)).count()
    }
}

/// Outcome of the bounded backtracking phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    /// Every participant placed without conflicts.
    Found,
    /// The whole search space was explored without a solution.
    Exhausted,
    /// The node budget ran out first.
    BudgetExceeded,
}

/// Groups under construction plus the bookkeeping of one search.
pub(crate) struct Placement<'a, O: PlacementObserver> {
    pub(crate) ids: &'a [&'a str],
    pub(crate) conflicts: &'a LocalConflicts,
    pub(crate) targets: &'a [usize],
    pub(crate) groups: Vec<Vec<usize>>,
    pub(crate) observer: &'a mut O,
}

impl<'a, O: PlacementObserver> Placement<'a, O> {
    pub(crate) fn new(
        ids: &'a [&'a str],
        conflicts: &'a LocalConflicts,
        targets: &'a [usize],
        observer: &'a mut O,
    ) -> Self {
        Self {
            ids,
            conflicts,
            targets,
            groups: targets.iter().map(|&t| Vec::with_capacity(t)).collect(),
            observer,
        }
    }

    #[inline]
    pub(crate) fn has_room(&self, g: usize) -> bool {
        self.groups[g].len() < self.targets[g]
    }

    pub(crate) fn push(&mut self, p: usize, g: usize, strategy: Strategy) {
        self.groups[g].push(p);
        self.observer.on_place(self.ids[p], g, strategy);
    }

    pub(crate) fn pop(&mut self, g: usize) {
        if let Some(p) = self.groups[g].pop() {
            self.observer.on_undo(self.ids[p], g);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.groups.iter_mut().for_each(Vec::clear);
        self.observer.on_reset();
    }

    /// Converts index groups back to participant IDs.
    pub(crate) fn into_id_groups(self) -> Vec<Vec<String>> {
        let ids = self.ids;
        self.groups
            .into_iter()
            .map(|g| g.into_iter().map(|p| ids[p].to_string()).collect())
            .collect()
    }
}

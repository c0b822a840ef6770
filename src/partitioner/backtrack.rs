//! Bounded backtracking placement.
//!
//! # Algorithm
//!
//! Participants are taken in (shuffled) order. Each is placed into the
//! first group, in group order, that still has room and holds no member
//! it conflicts with; the search then recurses to the next participant.
//! When no group accepts a participant, the previous placement is undone
//! and its next candidate group is tried.
//!
//! Every placement attempt counts as one node. Once the count exceeds the
//! budget the search aborts, so runtime is bounded even on densely
//! conflicted rosters where exhaustive search would be exponential.
//!
//! # Reference
//! Knuth (2019), "The Art of Computer Programming", Vol. 4B, §7.2.2

use super::search::{Placement, SearchStatus};
use crate::models::{PlacementObserver, Strategy};

/// Backtracking search over a fixed participant order.
pub(crate) struct Backtracker<'p, 'a, O: PlacementObserver> {
    placement: &'p mut Placement<'a, O>,
    order: &'p [usize],
    budget: u64,
    nodes: u64,
}

impl<'p, 'a, O: PlacementObserver> Backtracker<'p, 'a, O> {
    pub(crate) fn new(placement: &'p mut Placement<'a, O>, order: &'p [usize], budget: u64) -> Self {
        Self {
            placement,
            order,
            budget,
            nodes: 0,
        }
    }

    /// Runs the search. Returns the status and the nodes visited.
    ///
    /// On `Found` the placement holds a complete conflict-free assignment;
    /// otherwise its contents are unspecified and must be reset.
    pub(crate) fn run(mut self) -> (SearchStatus, u64) {
        let status = self.place(0);
        (status, self.nodes)
    }

    fn place(&mut self, pos: usize) -> SearchStatus {
        if pos == self.order.len() {
            return SearchStatus::Found;
        }
        self.nodes += 1;
        if self.nodes > self.budget {
            return SearchStatus::BudgetExceeded;
        }

        let p = self.order[pos];
        for g in 0..self.placement.groups.len() {
            if !self.placement.has_room(g) {
                continue;
            }
            if self
                .placement
                .conflicts
                .count_in(p, &self.placement.groups[g])
                > 0
            {
                continue;
            }

            self.placement.push(p, g, Strategy::Backtracking);
            match self.place(pos + 1) {
                SearchStatus::Exhausted => self.placement.pop(g),
                done => return done,
            }
        }
        SearchStatus::Exhausted
    }
}

//! Search entry point and the shared step loop.
//!
//! One generic [`SearchEngine`] runs all four strategies; the differences
//! live in [`SearchStrategy`]. Each `step()` removes one node and either
//! finishes on the goal or expands it:
//!
//! ```text
//! remove_next ─┬─ empty ──► Failure  (IDA*: raise bound, reseed, Working)
//!              ├─ goal  ──► Success
//!              └─ expand ─► children in strategy order
//!                           ├─ duplicate in explored set → skip
//!                           ├─ IDA* priority > bound     → candidate next bound
//!                           └─ enqueue (record if OnGenerate)
//!                           then record expanded node → Working
//! ```

use std::marker::PhantomData;

use npuzzle_kernel::error::ConfigurationError;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::{BoardTopology, Move};

use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::outcome::{SearchOutcome, SearchStats, SearchStatus};
use crate::policy::{ExploredMarkingV1, SearchPolicyV1};
use crate::strategy::{
    BestFirst, BoundedBestFirst, BreadthFirst, DepthFirst, IterationOrder, SearchStrategy,
    Strategy,
};

/// Single-threaded search state for one solve invocation.
///
/// Owns its frontier, explored set and node arena exclusively. The topology
/// is borrowed read-only for the engine's lifetime.
#[derive(Debug)]
pub struct SearchEngine<'t, S: SearchStrategy> {
    topology: &'t BoardTopology,
    initial: Board,
    goal: Board,
    policy: SearchPolicyV1,
    arena: NodeArena,
    frontier: S::Frontier,
    explored: ExploredSet,
    stats: SearchStats,
    status: SearchStatus,
    terminal: Option<NodeId>,
    /// Current IDA* bound (`None` for unbounded strategies).
    bound: Option<u32>,
    /// Smallest priority rejected by the bound during this pass.
    next_bound: Option<u32>,
    _strategy: PhantomData<S>,
}

impl<'t, S: SearchStrategy> SearchEngine<'t, S> {
    /// Create an engine seeded with `initial` as the root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LengthMismatch`] if `initial` was built
    /// for a different board size than `topology`.
    pub fn new(
        initial: Board,
        topology: &'t BoardTopology,
        policy: SearchPolicyV1,
    ) -> Result<Self, ConfigurationError> {
        if initial.len() != topology.cell_count() {
            return Err(ConfigurationError::LengthMismatch {
                expected: topology.cell_count(),
                actual: initial.len(),
            });
        }

        let bound = S::BOUNDED.then(|| S::priority(0, &initial, topology));
        let mut engine = Self {
            topology,
            goal: Board::goal(topology),
            initial,
            policy,
            arena: NodeArena::new(),
            frontier: S::Frontier::default(),
            explored: ExploredSet::new(),
            stats: SearchStats::default(),
            status: SearchStatus::Working,
            terminal: None,
            bound,
            next_bound: None,
            _strategy: PhantomData,
        };
        engine.seed_pass();

        log::debug!(
            "{} search on {} cells, marking {}, initial bound {:?}",
            S::KIND.long_name(),
            topology.cell_count(),
            policy.explored_marking.as_str(),
            engine.bound
        );
        Ok(engine)
    }

    /// Fresh frontier, explored set and tree holding only the root.
    fn seed_pass(&mut self) {
        self.arena.clear();
        self.frontier.clear();
        self.explored.clear();
        self.next_bound = None;

        let priority = S::priority(0, &self.initial, self.topology);
        let root = self.arena.insert_root(self.initial.clone(), priority);
        self.frontier.insert(root, priority);
    }

    /// Advance the search by one frontier removal.
    ///
    /// After a terminal status has been returned, further calls return it
    /// again without doing any work.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let Some(current) = self.frontier.remove_next() else {
            return self.frontier_exhausted();
        };

        let node = self.arena.get(current);
        if node.board == self.goal {
            self.terminal = Some(current);
            self.status = SearchStatus::Success;
            log::debug!(
                "{} reached goal at depth {} after {} expansions",
                S::KIND,
                node.depth,
                self.stats.nodes_expanded
            );
            return self.status;
        }

        let board = node.board.clone();
        let fingerprint = node.fingerprint;
        let path_cost = node.path_cost;
        self.stats.nodes_expanded += 1;
        log::trace!(
            "expand #{} depth={} cost={} priority={} frontier={}",
            self.stats.nodes_expanded,
            node.depth,
            path_cost,
            node.priority,
            self.frontier.len()
        );

        let moves = board.legal_moves(self.topology);
        for i in 0..moves.len() {
            let index = match S::ITERATION {
                IterationOrder::Forward => i,
                IterationOrder::Reversed => moves.len() - 1 - i,
            };
            self.consider_child(current, &board, path_cost + 1, moves[index]);
        }

        self.stats.max_frontier_size = self.stats.max_frontier_size.max(self.frontier.len());
        self.explored.record(fingerprint, path_cost);
        SearchStatus::Working
    }

    /// Generate one child and enqueue it unless suppressed.
    fn consider_child(&mut self, parent: NodeId, board: &Board, child_cost: u32, m: Move) {
        let child = board.apply_move(board.blank_position(), m.target);
        let fingerprint = child.fingerprint();
        if self
            .explored
            .is_duplicate(&fingerprint, child_cost, S::REOPEN_CHEAPER)
        {
            return;
        }

        let priority = S::priority(child_cost, &child, self.topology);
        if let Some(bound) = self.bound {
            if priority > bound {
                self.next_bound = Some(self.next_bound.map_or(priority, |b| b.min(priority)));
                return;
            }
        }

        if self.policy.explored_marking == ExploredMarkingV1::OnGenerate {
            self.explored.record(fingerprint, child_cost);
        }
        let id = self
            .arena
            .insert_child(parent, child, fingerprint, m.direction, priority);
        self.frontier.insert(id, priority);
        self.stats.max_search_depth = self.stats.max_search_depth.max(self.arena.get(id).depth);
    }

    /// Empty frontier: IDA* escalates to the next bound, everything else fails.
    fn frontier_exhausted(&mut self) -> SearchStatus {
        if let (true, Some(next)) = (S::BOUNDED, self.next_bound) {
            log::debug!(
                "bound {:?} exhausted after {} expansions; raising to {next}",
                self.bound,
                self.stats.nodes_expanded
            );
            self.bound = Some(next);
            self.stats.bound_passes += 1;
            self.seed_pass();
            return SearchStatus::Working;
        }

        self.status = SearchStatus::Failure;
        log::debug!(
            "{} exhausted the reachable space after {} expansions",
            S::KIND,
            self.stats.nodes_expanded
        );
        self.status
    }

    /// Call [`step`](Self::step) until it returns a terminal status.
    pub fn run_to_completion(&mut self) -> SearchStatus {
        loop {
            let status = self.step();
            if status.is_terminal() {
                return status;
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Nodes currently waiting in the frontier.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Board the next `step()` will remove.
    #[must_use]
    pub fn peek_next(&self) -> Option<&Board> {
        self.frontier.peek().map(|id| &self.arena.get(id).board)
    }

    /// Current IDA* bound.
    #[must_use]
    pub fn bound(&self) -> Option<u32> {
        self.bound
    }

    /// Distinct boards in the explored set (current pass for IDA*).
    #[must_use]
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// The goal node, once found.
    #[must_use]
    pub fn terminal_node(&self) -> Option<&SearchNode> {
        self.terminal.map(|id| self.arena.get(id))
    }

    /// Snapshot the result, reconstructing the path on success.
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        let terminal = self.terminal_node();
        SearchOutcome {
            strategy: S::KIND,
            status: self.status,
            path: self
                .terminal
                .map(|id| self.arena.path_to(id))
                .unwrap_or_default(),
            path_cost: terminal.map(|n| n.path_cost),
            search_depth: terminal.map(|n| n.depth),
            frontier_size: self.frontier.len(),
            stats: self.stats,
            final_bound: self.bound,
        }
    }
}

/// Object-safe view of a [`SearchEngine`] with the strategy erased.
///
/// Lets callers that pick a strategy at runtime drive the step loop
/// themselves (budgets, progress output) without matching on every call.
pub trait SearchDriver {
    fn step(&mut self) -> SearchStatus;
    fn run_to_completion(&mut self) -> SearchStatus;
    fn status(&self) -> SearchStatus;
    fn stats(&self) -> &SearchStats;
    fn frontier_len(&self) -> usize;
    fn outcome(&self) -> SearchOutcome;
}

impl<S: SearchStrategy> SearchDriver for SearchEngine<'_, S> {
    fn step(&mut self) -> SearchStatus {
        SearchEngine::step(self)
    }

    fn run_to_completion(&mut self) -> SearchStatus {
        SearchEngine::run_to_completion(self)
    }

    fn status(&self) -> SearchStatus {
        SearchEngine::status(self)
    }

    fn stats(&self) -> &SearchStats {
        SearchEngine::stats(self)
    }

    fn frontier_len(&self) -> usize {
        SearchEngine::frontier_len(self)
    }

    fn outcome(&self) -> SearchOutcome {
        SearchEngine::outcome(self)
    }
}

/// Build the engine for a runtime strategy selector.
///
/// # Errors
///
/// Returns [`ConfigurationError::LengthMismatch`] if `initial` and
/// `topology` disagree on board size.
pub fn engine_for<'t>(
    strategy: Strategy,
    initial: Board,
    topology: &'t BoardTopology,
    policy: SearchPolicyV1,
) -> Result<Box<dyn SearchDriver + 't>, ConfigurationError> {
    let engine: Box<dyn SearchDriver + 't> = match strategy {
        Strategy::BreadthFirst => {
            Box::new(SearchEngine::<BreadthFirst>::new(initial, topology, policy)?)
        }
        Strategy::DepthFirst => {
            Box::new(SearchEngine::<DepthFirst>::new(initial, topology, policy)?)
        }
        Strategy::BestFirst => Box::new(SearchEngine::<BestFirst>::new(initial, topology, policy)?),
        Strategy::BoundedBestFirst => {
            Box::new(SearchEngine::<BoundedBestFirst>::new(initial, topology, policy)?)
        }
    };
    Ok(engine)
}

/// Run `strategy` from `initial` to a terminal status.
///
/// # Errors
///
/// Returns [`ConfigurationError::LengthMismatch`] if `initial` and
/// `topology` disagree on board size. An unsolvable board is not an error:
/// it yields an outcome with [`SearchStatus::Failure`].
pub fn solve(
    strategy: Strategy,
    initial: &Board,
    topology: &BoardTopology,
    policy: SearchPolicyV1,
) -> Result<SearchOutcome, ConfigurationError> {
    let mut engine = engine_for(strategy, initial.clone(), topology, policy)?;
    engine.run_to_completion();
    Ok(engine.outcome())
}

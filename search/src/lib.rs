//! N-puzzle Search: deterministic state-space search over sliding-tile boards.
//!
//! This crate provides the search layer. It depends only on
//! `npuzzle_kernel`; it does NOT depend on `npuzzle_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! npuzzle_kernel  ←  npuzzle_search  ←  npuzzle_harness
//! (topology, board)  (frontier, nodes)   (request, report, CLI)
//! ```
//!
//! # Key types
//!
//! - [`node::NodeArena`]: append-only node store; parents are handles, not owners
//! - [`frontier::Frontier`]: FIFO, LIFO and priority-ordered containers
//! - [`explored::ExploredSet`]: fingerprint-keyed duplicate suppression
//! - [`strategy::SearchStrategy`]: per-strategy removal, priority and iteration order
//! - [`search::SearchEngine`]: the single step loop shared by all strategies
//! - [`outcome::SearchOutcome`]: terminal status, path and statistics

#![forbid(unsafe_code)]

pub mod explored;
pub mod frontier;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
pub mod strategy;

pub use npuzzle_kernel::error::ConfigurationError;

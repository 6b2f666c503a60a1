//! N-puzzle kernel: the pure value layer of the sliding-tile solver.
//!
//! # API Surface
//!
//! - [`puzzle::topology::BoardTopology`] -- per-cell move table and coordinates for one side length
//! - [`puzzle::board::Board`] -- immutable tile permutation with move application and heuristic
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 used for board fingerprints
//!
//! # Module Dependency Direction
//!
//! `error`, `proof` ← `puzzle`
//!
//! One-way only. `puzzle` depends on `proof` for fingerprints and on
//! `error` for validation failures; `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod proof;
pub mod puzzle;

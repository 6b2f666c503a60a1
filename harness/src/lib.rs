//! N-puzzle Harness: the collaborators around the search core.
//!
//! The harness turns command-line text into a validated [`request::SolveRequest`],
//! drives the engine under a step budget, samples wall-clock time and peak
//! memory, and renders the result as a report file.
//!
//! The harness does NOT implement search logic. It delegates to
//! `npuzzle_search`; everything here is I/O and formatting.
//!
//! ```text
//! SolveRequest::parse() → runner::run() → SearchReportV1::from_record()
//!   → to_text() | to_json() → write_report()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod instrument;
pub mod report;
pub mod request;
pub mod runner;

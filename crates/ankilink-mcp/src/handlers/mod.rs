//! Tool handlers, one module per logical tool.
//!
//! Each handler is an async function from arguments to an ordered sequence
//! of text blocks. Handlers never return an error: remote and validation
//! failures are folded into the text according to each tool's own
//! propagation policy, which is part of its contract:
//!
//! - `overview` fails fast on deck/model/tag fetches but degrades gracefully
//!   per model on field fetches.
//! - `notes`, `cards`, and `suspend` fail fast on the first remote error.
//! - `upsert` reports per-note outcomes and never aborts the batch.
//! - `stats` collects errors across independent sections and still returns
//!   partial results.

pub mod cards;
pub mod notes;
pub mod overview;
pub mod review_stats;
pub mod stats;
pub mod suspend;
pub mod upsert;

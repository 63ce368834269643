//! Report materialization engine.
//!
//! Turns caller-supplied raw report rows into flat, human-readable records
//! ready for spreadsheet export. The pipeline for one run:
//!
//! 1. `sla` classifies the requested elapsed-time columns into a three-way
//!    SLA status and writes it back into the raw rows.
//! 2. `cache` bulk-loads exactly the referenced ids of every reference
//!    domain the requested columns resolve against (one query per domain).
//! 3. `materialize` walks rows in order and columns in requested order,
//!    resolving each cell through `resolve` (which delegates the rare
//!    one-hop relation columns to `relation`).
//! 4. `export` renders the materialized rows through the Export Adapter.
//!
//! Everything the engine builds is request-scoped; the reference cache is
//! constructed once per run and read-only afterwards.

pub mod cache;
pub mod columns;
pub mod export;
pub mod materialize;
pub mod relation;
pub mod resolve;
pub mod sla;

#[cfg(test)]
mod test;

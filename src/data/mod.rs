//! Data access layer.
//!
//! Repositories and reference-domain sources own all SeaORM queries. The
//! `reference` module holds the statically registered capability
//! implementations the report engine resolves lookup values through.

pub mod reference;
pub mod sla_threshold;

#[cfg(test)]
mod test;

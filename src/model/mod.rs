//! Domain models and API DTOs.
//!
//! Report models describe the declarative column catalog and the
//! request-scoped structures flowing through the materialization engine.
//! DTOs in `api` are the wire representations exchanged with clients.

pub mod api;
pub mod report;

//! HTTP request handlers.

pub mod report;

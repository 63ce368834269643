//! Business logic orchestration between controllers and the data layer.

pub mod report;

//! Casereport Test Utils
//!
//! Shared testing utilities for building integration and unit tests for the
//! reporting backend. Offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and customizable table schemas, plus
//! factories for the reference and threshold entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::VehicleType;
//!
//! #[tokio::test]
//! async fn test_vehicle_type_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(VehicleType)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

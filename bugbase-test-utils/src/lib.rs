//! Test utilities for the Bugbase server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and lookup rows a
//! test needs, then `build()` returns a [`TestContext`] holding an in-memory SQLite database
//! with fixture helpers for inserting users, tickets and notes.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}

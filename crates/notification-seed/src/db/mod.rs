//! Database integration for seeding notifications.
//!
//! The [`Seeder`] creates the target collection and inserts the fixture
//! records, treating an existing collection and already-present ids as
//! success so the run can be repeated.

mod seeder;

pub use seeder::{InsertSummary, SeedError, SeedReport, Seeder};

//! Seed data for the auction notification service.
//!
//! This crate creates the `notifications` collection in the `testdb` database
//! and inserts a fixed set of user notifications for development and
//! integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use notification_seed::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let seeder = Seeder::new(config.connect().await?);
//! let report = seeder.seed().await?;
//! seeder.verify().await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DEFAULT_DATABASE, NOTIFICATIONS_COLLECTION, SeedConfig};
    pub use crate::db::{InsertSummary, SeedError, SeedReport, Seeder};
    pub use crate::fixtures::{SEED_IDS, seed_notifications};
    pub use crate::models::Notification;
}

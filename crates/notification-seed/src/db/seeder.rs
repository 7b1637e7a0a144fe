//! Database seeding utilities.

use bson::doc;
use mongodb::{
    Collection, Database,
    error::{BulkWriteError, ErrorKind},
    options::InsertManyOptions,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::NOTIFICATIONS_COLLECTION;
use crate::fixtures::{SEED_IDS, seed_notifications};
use crate::models::Notification;

/// Server code for `NamespaceExists`, returned by `create` on an existing collection.
const NAMESPACE_EXISTS: i32 = 48;

/// Server code for `DuplicateKey`.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Write error on record {index} (code {code}): {message}")]
    Write {
        index: usize,
        code: i32,
        message: String,
    },
    #[error("Seed incomplete: expected {expected} records, found {found}")]
    Incomplete { expected: u64, found: u64 },
}

/// Outcome of a batch insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertSummary {
    pub inserted: usize,
    /// Records whose id was already present.
    pub skipped: usize,
}

/// Outcome of a full seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub collection_created: bool,
    pub inserted: usize,
    pub skipped: usize,
}

/// A single failed write from a batch insert.
#[derive(Debug, Clone)]
struct WriteFailure {
    index: usize,
    code: i32,
    message: String,
}

impl From<&BulkWriteError> for WriteFailure {
    fn from(err: &BulkWriteError) -> Self {
        Self {
            index: err.index,
            code: err.code,
            message: err.message.clone(),
        }
    }
}

/// Counts duplicate-key failures, or returns the first failure of any other kind.
fn count_duplicates(failures: &[WriteFailure]) -> Result<usize, SeedError> {
    match failures.iter().find(|f| f.code != DUPLICATE_KEY) {
        Some(f) => Err(SeedError::Write {
            index: f.index,
            code: f.code,
            message: f.message.clone(),
        }),
        None => Ok(failures.len()),
    }
}

/// Seeds the notifications collection.
///
/// Re-running is safe: an existing collection is reused and records whose
/// `_id` is already present are skipped.
pub struct Seeder {
    database: Database,
    collection_name: String,
}

impl Seeder {
    /// Creates a seeder targeting the `notifications` collection of `database`.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            collection_name: NOTIFICATIONS_COLLECTION.to_string(),
        }
    }

    /// Sets the target collection name.
    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Ensures the collection exists and inserts the fixture records.
    pub async fn seed(&self) -> Result<SeedReport, SeedError> {
        let collection_created = self.ensure_collection(&self.collection_name).await?;
        let summary = self.insert_seed_records(&seed_notifications()).await?;

        Ok(SeedReport {
            collection_created,
            inserted: summary.inserted,
            skipped: summary.skipped,
        })
    }

    /// Creates the collection if it does not exist.
    ///
    /// Returns `true` if the collection was created by this call.
    pub async fn ensure_collection(&self, name: &str) -> Result<bool, SeedError> {
        match self.database.create_collection(name, None).await {
            Ok(()) => {
                info!("Created collection {}.{}", self.database.name(), name);
                Ok(true)
            }
            Err(err) => match err.kind.as_ref() {
                ErrorKind::Command(cmd) if cmd.code == NAMESPACE_EXISTS => {
                    debug!("Collection {}.{} already exists", self.database.name(), name);
                    Ok(false)
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Inserts `records` in a single unordered batch.
    ///
    /// Duplicate-key failures are counted as skipped; any other write failure
    /// is returned as [`SeedError::Write`].
    pub async fn insert_seed_records(
        &self,
        records: &[Notification],
    ) -> Result<InsertSummary, SeedError> {
        if records.is_empty() {
            return Ok(InsertSummary::default());
        }

        info!("Seeding {} notifications...", records.len());

        let options = InsertManyOptions::builder().ordered(false).build();
        match self.collection().insert_many(records, options).await {
            Ok(result) => {
                info!("Seeded {} notifications", result.inserted_ids.len());
                Ok(InsertSummary {
                    inserted: result.inserted_ids.len(),
                    skipped: 0,
                })
            }
            Err(err) => {
                let failures: Vec<WriteFailure> = match err.kind.as_ref() {
                    ErrorKind::BulkWrite(failure) if failure.write_concern_error.is_none() => {
                        failure
                            .write_errors
                            .as_deref()
                            .unwrap_or_default()
                            .iter()
                            .map(WriteFailure::from)
                            .collect()
                    }
                    _ => return Err(err.into()),
                };
                if failures.is_empty() {
                    return Err(err.into());
                }

                let skipped = count_duplicates(&failures)?;
                warn!("Skipped {} notifications already present", skipped);

                Ok(InsertSummary {
                    inserted: records.len() - skipped,
                    skipped,
                })
            }
        }
    }

    /// Checks that every fixture record is present in the collection.
    pub async fn verify(&self) -> Result<(), SeedError> {
        let ids: Vec<_> = SEED_IDS.to_vec();
        let expected = ids.len() as u64;
        let found = self
            .collection()
            .count_documents(doc! { "_id": { "$in": ids } }, None)
            .await?;

        if found != expected {
            return Err(SeedError::Incomplete { expected, found });
        }

        debug!("Verified {} seed notifications", found);
        Ok(())
    }

    /// Returns the typed target collection.
    pub fn collection(&self) -> Collection<Notification> {
        self.database.collection(&self.collection_name)
    }

    /// Returns a reference to the database for advanced usage.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(index: usize, code: i32) -> WriteFailure {
        WriteFailure {
            index,
            code,
            message: format!("failure {index}"),
        }
    }

    #[test]
    fn test_all_duplicates_are_skipped() {
        let failures = vec![failure(0, DUPLICATE_KEY), failure(3, DUPLICATE_KEY)];
        assert_eq!(count_duplicates(&failures).unwrap(), 2);
    }

    #[test]
    fn test_other_failure_is_fatal() {
        let failures = vec![failure(0, DUPLICATE_KEY), failure(2, 121)];

        match count_duplicates(&failures) {
            Err(SeedError::Write { index, code, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(code, 121);
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_message() {
        let err = SeedError::Incomplete {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Seed incomplete: expected 4 records, found 3"
        );
    }
}

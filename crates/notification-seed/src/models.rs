//! Document types stored by the seeder.

use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A user notification as stored in the `notifications` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Owning user. Not checked against any users collection.
    pub user_id: i64,
    pub message: String,
    pub timestamp: DateTime,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: ObjectId,
        user_id: i64,
        message: impl Into<String>,
        timestamp: OffsetDateTime,
        read: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            message: message.into(),
            timestamp: DateTime::from_time_0_3(timestamp),
            read,
        }
    }

    /// Returns the timestamp as a UTC `OffsetDateTime`.
    pub fn timestamp_utc(&self) -> OffsetDateTime {
        self.timestamp.to_time_0_3()
    }
}

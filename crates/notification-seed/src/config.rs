//! Configuration for the seeding run.

use mongodb::{Client, Database, options::ClientOptions};
use tracing::info;

/// Database the notification service reads from.
pub const DEFAULT_DATABASE: &str = "testdb";

/// Collection holding user notifications.
pub const NOTIFICATIONS_COLLECTION: &str = "notifications";

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const APP_NAME: &str = "notification-seed";

/// Connection settings for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Target database name.
    pub database: String,

    /// Target collection name.
    pub collection: String,

    /// Application name reported to the server.
    pub app_name: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: NOTIFICATIONS_COLLECTION.to_string(),
            app_name: APP_NAME.to_string(),
        }
    }
}

impl SeedConfig {
    /// Reads the connection string from `MONGODB_URI`, falling back to localhost.
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        Self {
            uri,
            ..Self::default()
        }
    }

    /// Opens a client and returns a handle to the target database.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(&self) -> Result<Database, mongodb::error::Error> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.app_name = Some(self.app_name.clone());

        let hosts: Vec<String> = options.hosts.iter().map(ToString::to_string).collect();
        info!("Connecting to MongoDB at {}", hosts.join(","));

        let client = Client::with_options(options)?;
        Ok(client.database(&self.database))
    }
}

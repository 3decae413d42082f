mod insert_s3_object;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;
use sqlx::{Connection, PgConnection};

#[cfg(not(test))]
pub use DBClient as DB;

#[cfg(test)]
pub use MockDBClient as DB;

use crate::{config::DbConfig, error::IngestError};

/// Opens a fresh connection for every call, nothing is pooled between invocations.
#[derive(Clone, Debug)]
pub struct DBClient {
    config: DbConfig,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Records an uploaded object in `s3_objects`
    #[tracing::instrument(skip(self))]
    pub async fn insert_s3_object(&self, bucket: &str, object_key: &str) -> Result<(), IngestError> {
        let mut conn = PgConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(IngestError::Connection)?;

        tracing::info!("db connection successful");

        insert_s3_object::insert_s3_object(&mut conn, bucket, object_key)
            .await
            .map_err(IngestError::Persist)?;

        if let Err(e) = conn.close().await {
            tracing::warn!(error=?e, "unable to close db connection");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_unreachable_db() {
        // nothing accepts these credentials on the loopback interface
        let db = DBClient::new(DbConfig {
            host: "127.0.0.1".to_string(),
            name: "no_such_database".to_string(),
            user: "no_such_user".to_string(),
            password: "wrong".to_string(),
        });

        let result = db.insert_s3_object("my-bucket", "photo.png").await;

        assert!(matches!(result, Err(IngestError::Connection(_))));
    }
}

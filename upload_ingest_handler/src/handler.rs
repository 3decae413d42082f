use std::sync::Arc;

use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{error::IngestError, event, model::UploadedObject, service};

/// Handles the SNS event
/// The topic subscription delivers one upload notification per invocation. Failures are returned
/// to the runtime so the invocation is reported as failed and redelivery is left to the topic.
#[tracing::instrument(skip(db, event), fields(request_id=%event.context.request_id))]
pub async fn handler(db: Arc<service::db::DB>, event: LambdaEvent<SnsEvent>) -> Result<(), Error> {
    match ingest(&db, &event.payload).await {
        Ok(object) => {
            tracing::info!(bucket=%object.bucket, object_key=%object.object_key, "recorded uploaded object");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error=?e, "unable to ingest upload notification");
            Err(Error::from(e))
        }
    }
}

/// Unwraps the upload from the notification and records it.
/// Nothing touches the database unless both the envelope and the upload event are well formed.
pub async fn ingest(db: &service::db::DB, event: &SnsEvent) -> Result<UploadedObject, IngestError> {
    let upload_event = event::upload_event_from_notification(event)?;
    let object = event::uploaded_object(upload_event)?;

    tracing::info!(bucket=%object.bucket, object_key=%object.object_key, "upload event received from notification");

    db.insert_s3_object(&object.bucket, &object.object_key)
        .await?;

    Ok(object)
}

use aws_lambda_events::sns::SnsEvent;
use lambda_runtime::tracing;

use crate::{
    error::IngestError,
    model::{UploadEvent, UploadedObject},
};

/// Unwraps the S3 upload event carried by the single record of an SNS event.
/// The topic is expected to deliver exactly one record per invocation, anything else is rejected
/// before the message is decoded.
#[tracing::instrument(skip_all, err)]
pub fn upload_event_from_notification(event: &SnsEvent) -> Result<UploadEvent, IngestError> {
    let [record] = event.records.as_slice() else {
        return Err(IngestError::MalformedEnvelope {
            records: event.records.len(),
        });
    };

    tracing::trace!(message_id=%record.sns.message_id, "decoding notification message");
    let upload_event: UploadEvent = serde_json::from_str(&record.sns.message)?;
    Ok(upload_event)
}

/// Pulls the bucket name and object key out of an upload event, untouched.
#[tracing::instrument(skip_all, err)]
pub fn uploaded_object(event: UploadEvent) -> Result<UploadedObject, IngestError> {
    let records = event.records.len();
    let Ok([record]) = <[_; 1]>::try_from(event.records) else {
        return Err(IngestError::MalformedDescriptor { records });
    };

    Ok(record.into())
}

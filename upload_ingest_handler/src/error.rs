/// Every way a single invocation can fail. None of these are retried.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("unsupported format: more than 1 record in the notification event (got {records})")]
    MalformedEnvelope { records: usize },

    #[error("unable to decode upload event from notification message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unsupported format: more than 1 record in the upload event (got {records})")]
    MalformedDescriptor { records: usize },

    #[error("could not connect to db")]
    Connection(#[source] sqlx::Error),

    /// begin, insert or commit failed on an open connection
    #[error("could not persist uploaded object")]
    Persist(#[source] sqlx::Error),
}

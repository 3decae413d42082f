use serde::{Deserialize, Serialize};

/// The S3 event notification carried in the `Message` of an SNS record.
/// Only the fields needed to locate the object are modelled, the rest are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    #[serde(rename = "Records")]
    pub records: Vec<UploadRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub s3: S3Entity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct S3Object {
    /// Still url encoded exactly as S3 sent it
    pub key: String,
}

/// A row of `s3_objects`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub bucket: String,
    pub object_key: String,
}

impl From<UploadRecord> for UploadedObject {
    fn from(record: UploadRecord) -> Self {
        Self {
            bucket: record.s3.bucket.name,
            object_key: record.s3.object.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_event_metadata() {
        // S3 test events and hand-published messages carry no eventTime, eventName, ...
        let event: UploadEvent = serde_json::from_str(
            r#"{"Records":[{"s3":{"bucket":{"name":"my-bucket"},"object":{"key":"photo.png"}}}]}"#,
        )
        .unwrap();

        let [record] = event.records.as_slice() else {
            panic!("expected one record, got {}", event.records.len());
        };
        assert_eq!(record.s3.bucket.name, "my-bucket");
        assert_eq!(record.s3.object.key, "photo.png");
    }
}

use aws_lambda_events::sns::SnsEvent;
use serde_json::json;

/// The upload from the bucket's `s3:ObjectCreated:*` notification used across tests
pub const PHOTO_UPLOAD: &str =
    r#"{"Records":[{"s3":{"bucket":{"name":"my-bucket"},"object":{"key":"photo.png"}}}]}"#;

/// Builds an SNS event with one record per message
pub fn sns_event(messages: &[&str]) -> SnsEvent {
    let records: Vec<serde_json::Value> = messages
        .iter()
        .enumerate()
        .map(|(i, message)| {
            json!({
                "EventSource": "aws:sns",
                "EventVersion": "1.0",
                "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:s3-uploads:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55",
                "Sns": {
                    "Type": "Notification",
                    "MessageId": format!("95df01b4-ee98-5cb9-9903-4c221d41eb5{i}"),
                    "TopicArn": "arn:aws:sns:us-east-1:123456789012:s3-uploads",
                    "Subject": "Amazon S3 Notification",
                    "Message": message,
                    "Timestamp": "2024-05-14T18:24:36.250Z",
                    "SignatureVersion": "1",
                    "Signature": "EXAMPLEpH+DcEwjAPg8O9mY8dReBSwksfg2S7WKQcikcNKWLQjwu6A4VbeS0QHVCkhRS7fUQvi2egU3N858fiTDN6bkkOxYDVrY0Ad8L10Hs3zH81mtnPk5uvvolIC1CXGu43obcgFxeL3khZl8IKvO61GWB6jI9b5+gLPoBc1Q=",
                    "SigningCertUrl": "https://sns.us-east-1.amazonaws.com/SimpleNotificationService-0000000000000000000000.pem",
                    "UnsubscribeUrl": "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe&SubscriptionArn=arn:aws:sns:us-east-1:123456789012:s3-uploads:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55",
                    "MessageAttributes": {}
                }
            })
        })
        .collect();

    serde_json::from_value(json!({ "Records": records })).expect("valid sns event")
}

use sqlx::{Connection, PgConnection};

/// Inserts one row inside its own transaction.
/// The transaction rolls back when dropped, so only a successful insert is committed.
pub async fn insert_s3_object(
    conn: &mut PgConnection,
    bucket: &str,
    object_key: &str,
) -> Result<(), sqlx::Error> {
    let mut transaction = conn.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO s3_objects (bucket, object_key) VALUES ($1, $2)
        "#,
    )
    .bind(bucket)
    .bind(object_key)
    .execute(&mut *transaction)
    .await?;

    transaction.commit().await?;

    Ok(())
}

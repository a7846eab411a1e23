use tracing::info;

use crate::{adapters, model};

// The put and the get deliberately target different keys, reproducing the
// workflow this harness checks against.
// TODO: confirm whether the download should read test/test.text instead
pub const UPLOAD_KEY: &str = "test/test.text";
pub const DOWNLOAD_KEY: &str = "test.txt";

pub const PAYLOAD: &str = "Hello S3!!!";

/// Creates the bucket unless it is already visible to the caller's
/// credentials. Listing and matching are by exact name.
pub fn ensure_bucket(
    client: &dyn adapters::StorageAdapter,
    bucket: &str,
) -> Result<(), model::error::SmokeError> {
    let buckets = client.list_buckets()?;

    for name in &buckets {
        info!(bucket = %name, "listed bucket");
        if name == bucket {
            info!(bucket = %bucket, "bucket already exists");
            return Ok(());
        }
    }

    let location = client.create_bucket(bucket)?;
    info!(
        bucket = %bucket,
        location = location.as_deref().unwrap_or(""),
        "created bucket"
    );

    Ok(())
}

/// Writes the fixed payload under the fixed upload key.
pub fn upload_payload(
    client: &dyn adapters::StorageAdapter,
    bucket: &str,
) -> Result<(), model::error::SmokeError> {
    client.put_object(bucket, UPLOAD_KEY, PAYLOAD.as_bytes().to_vec())?;
    info!(bucket = %bucket, key = UPLOAD_KEY, "upload completed");

    Ok(())
}

/// Reads the object at the fixed download key fully into memory and checks
/// the transport-reported byte count against the buffer it actually holds.
pub fn download_object(
    client: &dyn adapters::StorageAdapter,
    bucket: &str,
) -> Result<Vec<u8>, model::error::SmokeError> {
    let downloaded = client.download_object(bucket, DOWNLOAD_KEY)?;

    let received = downloaded.bytes.len() as i64;
    if downloaded.reported_len != received {
        return Err(model::error::SmokeError::Consistency {
            message: format!(
                "number of bytes received does not match: {} vs {}",
                downloaded.reported_len, received
            ),
        });
    }

    info!(bucket = %bucket, key = DOWNLOAD_KEY, bytes = received, "download completed");

    Ok(downloaded.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::mock::MockClient;

    #[test]
    fn test_ensure_bucket_creates_when_absent() {
        let client = MockClient::new(vec!["test-bucket", "test-bucket-2"]);

        let result = ensure_bucket(&client, "test-bucket-1");

        assert!(result.is_ok());
        let created = client.created.lock().unwrap();
        assert_eq!(*created, vec!["test-bucket-1".to_string()]);
    }

    #[test]
    fn test_ensure_bucket_skips_when_present() {
        let cases = vec![
            (vec!["test-bucket"], "test-bucket"),
            (vec!["other", "target"], "target"),
        ];

        for (buckets, target) in cases {
            let client = MockClient::new(buckets);

            let result = ensure_bucket(&client, target);

            assert!(result.is_ok());
            assert!(client.created.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn test_upload_payload() {
        let client = MockClient::new(vec![]);

        let result = upload_payload(&client, "test-bucket-1");

        assert!(result.is_ok());
        let puts = client.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);

        let (bucket, key, body) = &puts[0];
        assert_eq!(bucket, "test-bucket-1");
        assert_eq!(key, UPLOAD_KEY);
        assert_eq!(body, PAYLOAD.as_bytes());
    }

    #[test]
    fn test_download_object_length_mismatch() {
        let mut client = MockClient::new(vec![]);
        client.download = crate::model::transfer::DownloadedObject {
            reported_len: 99,
            bytes: b"short".to_vec(),
        };

        let result = download_object(&client, "test-bucket-1");

        match result {
            Err(crate::model::error::SmokeError::Consistency { .. }) => {}
            other => panic!("expected consistency error, got: {:?}", other),
        }
    }

    #[test]
    fn test_download_object_returns_payload() {
        let mut client = MockClient::new(vec![]);
        client.download = crate::model::transfer::DownloadedObject {
            reported_len: PAYLOAD.len() as i64,
            bytes: PAYLOAD.as_bytes().to_vec(),
        };

        let result = download_object(&client, "test-bucket-1");

        assert_eq!(result.unwrap(), PAYLOAD.as_bytes());
    }
}

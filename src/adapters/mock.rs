use std::sync::Mutex;

use crate::{adapters, model};

/// In-memory stand-in for the S3 client. Serves canned responses and records
/// every mutating call so tests can assert on what was issued.
pub struct MockClient {
    pub buckets: Vec<String>,
    pub location: Option<String>,
    pub download: model::transfer::DownloadedObject,
    pub created: Mutex<Vec<String>>,
    pub puts: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl MockClient {
    pub fn new(buckets: Vec<&str>) -> Self {
        Self {
            buckets: buckets.into_iter().map(str::to_string).collect(),
            location: Some("us-east-1".to_string()),
            download: model::transfer::DownloadedObject {
                reported_len: 0,
                bytes: Vec::new(),
            },
            created: Mutex::new(Vec::new()),
            puts: Mutex::new(Vec::new()),
        }
    }
}

impl adapters::StorageAdapter for MockClient {
    fn list_buckets(&self) -> Result<Vec<String>, model::error::SmokeError> {
        Ok(self.buckets.clone())
    }

    fn create_bucket(&self, bucket: &str) -> Result<Option<String>, model::error::SmokeError> {
        self.created
            .lock()
            .expect("failed to acquire `created` guard")
            .push(bucket.to_string());

        Ok(self.location.clone())
    }

    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::SmokeError> {
        self.puts
            .lock()
            .expect("failed to acquire `puts` guard")
            .push((bucket.to_string(), key.to_string(), body));

        Ok(())
    }

    fn download_object(
        &self,
        _bucket: &str,
        _key: &str,
    ) -> Result<model::transfer::DownloadedObject, model::error::SmokeError> {
        Ok(self.download.clone())
    }
}

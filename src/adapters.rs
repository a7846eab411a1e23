use crate::model;

pub mod mock;
pub mod s3;

/// The four storage operations the smoke run needs. Implemented for the real
/// S3 client and for a recording mock so the orchestration is testable
/// without a network.
pub trait StorageAdapter {
    fn list_buckets(&self) -> Result<Vec<String>, model::error::SmokeError>;

    /// Creates the bucket and returns its location, when the provider
    /// reports one.
    fn create_bucket(&self, bucket: &str) -> Result<Option<String>, model::error::SmokeError>;

    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::SmokeError>;

    fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<model::transfer::DownloadedObject, model::error::SmokeError>;
}

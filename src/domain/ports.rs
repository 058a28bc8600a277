use crate::domain::model::{Dataset, RawRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Replaces `path` (relative to the storage root) with `data`, returning
    /// the full path written.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> &str;
    fn request_timeout(&self) -> Duration;

    fn output_path(&self) -> PathBuf {
        PathBuf::from(self.output_dir()).join(self.output_file())
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn source_endpoint(&self) -> &str;
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, records: Vec<RawRecord>) -> Dataset;
    async fn load(&self, rows: Dataset) -> Result<PathBuf>;
}

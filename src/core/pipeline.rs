use crate::core::fetch::HttpFetcher;
use crate::core::{transform, writer};
use crate::core::{ConfigProvider, Dataset, Pipeline, RawRecord, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Fetch → transform → write for the customer seed file.
pub struct SeedPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> SeedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.request_timeout())?;
        Ok(Self {
            storage,
            config,
            fetcher,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SeedPipeline<S, C> {
    fn source_endpoint(&self) -> &str {
        self.config.api_endpoint()
    }

    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Request timeout: {:?}", self.fetcher.timeout());
        self.fetcher.fetch(self.config.api_endpoint()).await
    }

    async fn transform(&self, records: Vec<RawRecord>) -> Dataset {
        // Captured once; every row of this run carries the same stamp.
        let now = Utc::now();
        tracing::debug!("Transforming {} records at {}", records.len(), now);
        transform::transform(&records, now)
    }

    async fn load(&self, rows: Dataset) -> Result<PathBuf> {
        writer::write_dataset(&self.storage, self.config.output_file(), &rows).await
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

const PREFIX: &str = "[refresh-seeds]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records_fetched: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// One run: fetch, transform, write. The first failure aborts the run.
    pub async fn run(&self) -> Result<RunSummary> {
        let endpoint = self.pipeline.source_endpoint();

        // Extract
        println!("{} Fetching from {} …", PREFIX, endpoint);
        tracing::info!(endpoint, "Fetching records");
        let records = self.pipeline.extract().await?;
        let records_fetched = records.len();
        println!("{} Received {} records", PREFIX, records_fetched);
        tracing::info!(records = records_fetched, "Fetched records");

        // Transform
        let rows = self.pipeline.transform(records).await;
        let rows_written = rows.len();
        debug_assert_eq!(rows_written, records_fetched);

        // Load
        let output_path = self.pipeline.load(rows).await?;
        println!(
            "{} Wrote {} rows to {}",
            PREFIX,
            rows_written,
            output_path.display()
        );
        tracing::info!(rows = rows_written, path = %output_path.display(), "Wrote seed file");

        Ok(RunSummary {
            records_fetched,
            rows_written,
            output_path,
        })
    }
}

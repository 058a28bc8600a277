pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{local::LocalStorage, SeedConfig};
pub use crate::core::{
    etl::{EtlEngine, RunSummary},
    fetch::{fetch_records, HttpFetcher},
    pipeline::SeedPipeline,
    transform::{split_name, transform},
    writer::write_csv,
};
pub use crate::domain::model::{Dataset, OutputRow, RawRecord, CSV_COLUMNS};
pub use crate::utils::error::{EtlError, Result};

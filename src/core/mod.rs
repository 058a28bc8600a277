pub mod etl;
pub mod fetch;
pub mod pipeline;
pub mod transform;
pub mod writer;

pub use crate::domain::model::{Dataset, OutputRow, RawRecord, CSV_COLUMNS};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

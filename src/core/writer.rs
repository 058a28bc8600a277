use crate::core::{OutputRow, Storage, CSV_COLUMNS};
use crate::config::local::LocalStorage;
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

/// Encodes rows as CSV: the fixed header, then one CRLF-terminated record per
/// row. Cells are quoted only when they contain a delimiter, quote or newline.
pub fn encode_dataset(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    // Written by hand so an empty dataset still gets a header line.
    writer.write_record(CSV_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))
}

pub async fn write_dataset<S: Storage>(
    storage: &S,
    file_name: &str,
    rows: &[OutputRow],
) -> Result<PathBuf> {
    let data = encode_dataset(rows)?;
    tracing::debug!("Encoded {} rows into {} bytes", rows.len(), data.len());
    storage.write_file(file_name, &data).await
}

/// Writes `rows` to `destination`, creating missing parent directories and
/// replacing any existing file.
pub async fn write_csv(rows: &[OutputRow], destination: &Path) -> Result<()> {
    let file_name = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a file path: {}", destination.display()),
            ))
        })?;

    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    write_dataset(&LocalStorage::new(parent), file_name, rows).await?;
    Ok(())
}

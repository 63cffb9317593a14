use crate::data::table::ListingTable;
use crate::errors::ServerError;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Anything that can hand the dashboard a fresh listings table.
pub trait ListingSource {
    fn load(&self) -> Result<ListingTable, ServerError>;
}

/// Reads the listings CSV from disk on every call. Nothing is cached, so each
/// navigation action sees the file as it is right now.
#[derive(Debug, Clone)]
pub struct CsvListingSource {
    path: PathBuf,
}

impl CsvListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingSource for CsvListingSource {
    fn load(&self) -> Result<ListingTable, ServerError> {
        let path = self.path.display();

        // Column types are inferred from the whole file, so a decimal price
        // deep in the file does not clash with whole numbers above it.
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| ServerError::DataLoad(format!("Failed to open {path}: {e}")))?
            .finish()
            .map_err(|e| ServerError::DataLoad(format!("Failed to parse {path}: {e}")))?;

        tracing::debug!(path = %path, rows = frame.height(), "listings loaded");
        Ok(ListingTable::from_frame(frame))
    }
}

use crate::domain::listing::{format_number, Field};
use crate::errors::ServerError;
use polars::prelude::*;

/// An in-memory snapshot of the listings file.
///
/// Columns are looked up lazily by name, so a renamed or absent column only
/// fails the view that asks for it.
#[derive(Debug, Clone)]
pub struct ListingTable {
    frame: DataFrame,
}

impl ListingTable {
    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Fails with `MissingColumn` when `field` is not in the file.
    pub fn require(&self, field: Field) -> Result<(), ServerError> {
        self.column(field).map(|_| ())
    }

    fn column(&self, field: Field) -> Result<&Column, ServerError> {
        self.frame
            .column(field.column())
            .map_err(|_| ServerError::MissingColumn(field.column().to_string()))
    }

    /// Numeric cells of `field`. Nulls, NaN and unparseable text come back as `None`.
    pub fn numbers(&self, field: Field) -> Result<Vec<Option<f64>>, ServerError> {
        let name = field.column();
        let casted = self
            .column(field)?
            .cast(&DataType::Float64)
            .map_err(|e| ServerError::DataLoad(format!("Cast of '{name}' to float failed: {e}")))?;
        let values = casted
            .f64()
            .map_err(|e| ServerError::DataLoad(format!("Column '{name}' is not numeric: {e}")))?;

        Ok(values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect())
    }

    /// Cells of `field` as display labels. Numeric columns are formatted.
    pub fn labels(&self, field: Field) -> Result<Vec<Option<String>>, ServerError> {
        if field.is_numeric() {
            return Ok(self
                .numbers(field)?
                .into_iter()
                .map(|v| v.map(format_number))
                .collect());
        }

        let name = field.column();
        let casted = self
            .column(field)?
            .cast(&DataType::String)
            .map_err(|e| ServerError::DataLoad(format!("Cast of '{name}' to text failed: {e}")))?;
        let values = casted
            .str()
            .map_err(|e| ServerError::DataLoad(format!("Column '{name}' is not text: {e}")))?;

        Ok(values
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect())
    }
}

pub mod source;
pub mod table;

pub use source::{CsvListingSource, ListingSource};
pub use table::ListingTable;

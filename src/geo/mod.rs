pub mod choropleth;
pub mod countries;

pub use choropleth::{render_geo, ChoroplethImage};

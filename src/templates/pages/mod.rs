pub mod about;
pub mod charts;
pub mod contact;
pub mod geo;

pub use about::about_page;
pub use charts::charts_page;
pub use contact::contact_page;
pub use geo::geo_page;

use crate::charts;
use crate::data::ListingSource;
use crate::errors::ServerError;
use crate::geo;
use crate::navigation::MenuItem;
use crate::responses::{html_response, stylesheet_response, ResultResp};
use crate::templates::pages;
use astra::Request;

pub fn handle<S: ListingSource>(req: Request, source: &S) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::info!(method, path, "request");

    match (method, path) {
        ("GET", "/static/main.css") => stylesheet_response(),
        ("GET", _) => match MenuItem::from_path(path) {
            Some(item) => show(item, source),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::BadRequest(format!("{method} is not supported"))),
    }
}

/// Renders one menu destination. Only the data pages touch the listings
/// file, and they reload it every time.
fn show<S: ListingSource>(item: MenuItem, source: &S) -> ResultResp {
    match item {
        MenuItem::About => html_response(pages::about_page()),
        MenuItem::Contact => html_response(pages::contact_page()),
        MenuItem::PlotsAndCharts => {
            let table = source.load()?;
            let panels = charts::render_catalog(&table);
            html_response(pages::charts_page(&panels))
        }
        MenuItem::GeoVisualization => {
            let table = source.load()?;
            let image = geo::render_geo(&table)?;
            html_response(pages::geo_page(&image))
        }
    }
}

use crate::config::{GEO_HEIGHT, GEO_WIDTH};
use crate::data::ListingTable;
use crate::domain::listing::{format_number, Field};
use crate::errors::ServerError;
use crate::geo::countries::{Atlas, CountryShape};
use maud::{html, Markup};
use std::collections::HashMap;

/// Plotly's default qualitative palette.
const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const LAND: &str = "#e5ecf6";
const UNKNOWN_COUNTRY: &str = "Unknown";

/// Hover fields attached to one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverRow {
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub availability_365: Option<f64>,
    pub property_type: Option<String>,
}

impl HoverRow {
    fn text(&self, country: &str) -> String {
        let number = |v: Option<f64>| v.map(format_number).unwrap_or_else(|| "n/a".into());
        format!(
            "country={country}\nprice={}\nrating={}\navailability_365={}\nproperty_type={}",
            number(self.price),
            number(self.rating),
            number(self.availability_365),
            self.property_type.as_deref().unwrap_or("n/a"),
        )
    }
}

/// Every listing of one country. The country is both the location key and
/// the color key.
#[derive(Debug, Clone)]
pub struct GeoRegion {
    pub country: String,
    pub color: &'static str,
    /// SVG path of the country outline, if the atlas knows the country.
    pub outline: Option<String>,
    pub rows: Vec<HoverRow>,
}

#[derive(Debug, Clone, Default)]
pub struct GeoView {
    pub regions: Vec<GeoRegion>,
}

impl GeoView {
    /// Groups rows by country in order of first appearance. Nothing is
    /// aggregated: each row keeps its own hover entry.
    pub fn from_table(table: &ListingTable, atlas: &Atlas) -> Result<Self, ServerError> {
        let countries = table.labels(Field::Country)?;
        let prices = table.numbers(Field::Price)?;
        let ratings = table.numbers(Field::Rating)?;
        let availability = table.numbers(Field::Availability365)?;
        let property_types = table.labels(Field::PropertyType)?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut regions: Vec<GeoRegion> = Vec::new();

        for row in 0..table.height() {
            let country = countries[row]
                .clone()
                .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string());

            let slot = match index.get(&country) {
                Some(&slot) => slot,
                None => {
                    let slot = regions.len();
                    regions.push(GeoRegion {
                        outline: atlas.find(&country).map(path_data),
                        color: PALETTE[slot % PALETTE.len()],
                        country: country.clone(),
                        rows: Vec::new(),
                    });
                    index.insert(country, slot);
                    slot
                }
            };

            regions[slot].rows.push(HoverRow {
                price: prices[row],
                rating: ratings[row],
                availability_365: availability[row],
                property_type: property_types[row].clone(),
            });
        }

        Ok(Self { regions })
    }
}

pub struct ChoroplethImage {
    pub markup: Markup,
}

/// Equirectangular projection onto the map canvas.
fn project(lat: f64, lon: f64) -> (f64, f64) {
    let x = (lon + 180.0) / 360.0 * GEO_WIDTH as f64;
    let y = (90.0 - lat) / 180.0 * GEO_HEIGHT as f64;
    (x, y)
}

fn path_data(shape: &CountryShape) -> String {
    let mut parts = Vec::new();
    for ring in &shape.rings {
        for (i, (lon, lat)) in ring.iter().enumerate() {
            let (x, y) = project(*lat, *lon);
            let command = if i == 0 { 'M' } else { 'L' };
            parts.push(format!("{command}{x:.1},{y:.1}"));
        }
        parts.push("Z".to_string());
    }
    parts.join(" ")
}

/// Fills each listed country with its color. Rows sharing a country are
/// drawn on top of each other, one outline per row, so every row keeps its
/// hover entry.
pub fn draw(view: &GeoView, atlas: &Atlas) -> Markup {
    html! {
        figure class="geo" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                width=(GEO_WIDTH)
                height=(GEO_HEIGHT)
                viewBox=(format!("0 0 {GEO_WIDTH} {GEO_HEIGHT}"))
                role="img"
            {
                rect width=(GEO_WIDTH) height=(GEO_HEIGHT) fill="#ffffff" {}
                g class="land" fill=(LAND) stroke="#ffffff" stroke-width="0.5" {
                    @for shape in atlas.shapes() {
                        path d=(path_data(shape)) {}
                    }
                }
                @for region in &view.regions {
                    @if let Some(outline) = &region.outline {
                        g class="region" data-country=(region.country) fill=(region.color) stroke="#ffffff" stroke-width="0.5" {
                            @for row in &region.rows {
                                path d=(outline) {
                                    title { (row.text(&region.country)) }
                                }
                            }
                        }
                    }
                }
            }
            figcaption {
                ul class="legend" {
                    @for region in &view.regions {
                        li {
                            span class="swatch" style=(format!("background:{}", region.color)) {}
                            (region.country)
                            @if region.outline.is_none() {
                                " (not on map)"
                                @for row in &region.rows {
                                    span class="hover-row" title=(row.text(&region.country)) { "●" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_geo(table: &ListingTable) -> Result<ChoroplethImage, ServerError> {
    let atlas = Atlas::load()?;
    let view = GeoView::from_table(table, &atlas)?;
    tracing::debug!(regions = view.regions.len(), "geo view built");
    Ok(ChoroplethImage {
        markup: draw(&view, &atlas),
    })
}

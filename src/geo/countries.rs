use crate::errors::ServerError;
use geojson::{GeoJson, Value};

/// Coarse world outlines, one feature per country with a `name` property.
const COUNTRIES_GEOJSON: &str = include_str!("../../static/countries.geojson");

const ALIASES: &[(&str, &str)] = &[
    ("usa", "united states"),
    ("us", "united states"),
    ("united states of america", "united states"),
    ("uk", "united kingdom"),
    ("great britain", "united kingdom"),
    ("türkiye", "turkey"),
    ("korea, republic of", "south korea"),
    ("czechia", "czech republic"),
];

/// One country outline as rings of (longitude, latitude).
#[derive(Debug, Clone)]
pub struct CountryShape {
    pub name: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

/// Every country outline the map can fill.
#[derive(Debug, Clone)]
pub struct Atlas {
    shapes: Vec<CountryShape>,
}

impl Atlas {
    /// The outlines compiled into the binary.
    pub fn load() -> Result<Self, ServerError> {
        Self::parse(COUNTRIES_GEOJSON)
    }

    pub fn parse(text: &str) -> Result<Self, ServerError> {
        let geojson: GeoJson = text
            .parse()
            .map_err(|e| ServerError::Render(format!("Country outlines are invalid: {e}")))?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(ServerError::Render(
                "Country outlines must be a feature collection".to_string(),
            ));
        };

        let mut shapes = Vec::new();
        for feature in collection.features {
            let Some(name) = feature
                .property("name")
                .and_then(|v| v.as_str())
                .map(str::to_string)
            else {
                continue;
            };
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let polygons = match geometry.value {
                Value::Polygon(polygon) => vec![polygon],
                Value::MultiPolygon(polygons) => polygons,
                _ => continue,
            };

            let rings = polygons
                .into_iter()
                .flatten()
                .map(|ring| {
                    ring.into_iter()
                        .filter_map(|p| Some((*p.first()?, *p.get(1)?)))
                        .collect()
                })
                .collect();
            shapes.push(CountryShape { name, rings });
        }

        tracing::debug!(countries = shapes.len(), "country outlines parsed");
        Ok(Self { shapes })
    }

    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    /// Looks a country up by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&CountryShape> {
        let key = name.trim().to_lowercase();
        let key = ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(key);

        self.shapes
            .iter()
            .find(|shape| shape.name.to_lowercase() == key)
    }
}

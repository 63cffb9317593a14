pub mod catalog;
pub mod derive;
pub mod render;
pub mod stats;

use crate::config::CHART_CANVAS;
use crate::data::ListingTable;
use crate::errors::ServerError;
use catalog::{catalog, ChartDescriptor, Derivation, Placement};
use render::AxisNames;

/// A rendered chart, as an inline SVG document.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub svg: String,
}

/// One cell of the two-column chart grid.
#[derive(Debug)]
pub struct ChartPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub placement: Placement,
    pub image: Result<ChartImage, ServerError>,
}

fn axis_names(derivation: Derivation) -> AxisNames<'static> {
    match derivation {
        Derivation::Mean {
            category, value, ..
        }
        | Derivation::Groups { category, value } => AxisNames {
            category: category.column(),
            value: value.column(),
        },
        Derivation::Values { value } => AxisNames {
            category: "",
            value: value.column(),
        },
        Derivation::Counts { category, .. } => AxisNames {
            category: category.column(),
            value: "count",
        },
    }
}

pub fn render(table: &ListingTable, descriptor: &ChartDescriptor) -> Result<ChartImage, ServerError> {
    if !descriptor.is_consistent() {
        return Err(ServerError::Render(format!(
            "'{}' cannot be drawn as {:?}",
            descriptor.title, descriptor.plot
        )));
    }
    let data = derive::derive(table, descriptor.rows, descriptor.derivation)?;
    if data.is_empty() {
        tracing::debug!(chart = descriptor.title, "no rows left after derivation");
    }
    let svg = render::draw(
        descriptor,
        &data,
        axis_names(descriptor.derivation),
        CHART_CANVAS,
    )?;
    Ok(ChartImage { svg })
}

/// Renders every catalog chart. A chart that fails only fails its own panel.
pub fn render_catalog(table: &ListingTable) -> Vec<ChartPanel> {
    catalog()
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let image = render(table, descriptor);
            if let Err(err) = &image {
                tracing::warn!(chart = descriptor.title, error = %err, "chart failed to render");
            }
            ChartPanel {
                title: descriptor.title,
                description: descriptor.description,
                placement: Placement::for_index(index),
                image,
            }
        })
        .collect()
}

use crate::charts::catalog::Placement;
use crate::charts::ChartPanel;
use maud::{html, Markup, PreEscaped};

pub mod error;
pub mod icons;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn chart_panel(panel: &ChartPanel) -> Markup {
    html! {
        section class="chart" {
            h1 { (panel.title) }
            p { (panel.description) }
            @match &panel.image {
                Ok(image) => div class="chart-image" { (PreEscaped(&image.svg)) },
                Err(err) => div class="chart-error" role="alert" { (err.to_string()) },
            }
        }
    }
}

/// Lays panels out in two columns by their placement.
pub fn chart_columns(panels: &[ChartPanel]) -> Markup {
    let column = |placement: Placement| {
        html! {
            @for panel in panels.iter().filter(|p| p.placement == placement) {
                (chart_panel(panel))
            }
        }
    };

    html! {
        div class="columns" {
            div class="column column-left" { (column(Placement::Left)) }
            div class="column column-right" { (column(Placement::Right)) }
        }
    }
}

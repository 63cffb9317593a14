use crate::charts::ChartPanel;
use crate::navigation::MenuItem;
use crate::templates::{components::chart_columns, desktop_layout};
use maud::{html, Markup};

pub fn charts_page(panels: &[ChartPanel]) -> Markup {
    desktop_layout(
        MenuItem::PlotsAndCharts,
        html! {
            (chart_columns(panels))
        },
    )
}

use crate::geo::ChoroplethImage;
use crate::navigation::MenuItem;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn geo_page(image: &ChoroplethImage) -> Markup {
    desktop_layout(
        MenuItem::GeoVisualization,
        html! {
            h2 class="accent-orange" { "Geo Visualization of Airbnb Data:" }
            div class="full-width" {
                (image.markup)
            }
        },
    )
}

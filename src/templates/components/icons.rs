use crate::navigation::MenuItem;
use maud::{html, Markup};

fn outline(body: Markup) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="18"
            height="18"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        {
            (body)
        }
    }
}

pub fn menu_icon() -> Markup {
    outline(html! {
        rect x="3" y="5" width="18" height="14" rx="2" {}
        path d="M7 10h10" {}
        path d="M7 14h6" {}
    })
}

pub fn item_icon(item: MenuItem) -> Markup {
    match item {
        // exclamation-circle
        MenuItem::About => outline(html! {
            circle cx="12" cy="12" r="9" {}
            path d="M12 8v4" {}
            path d="M12 16h.01" {}
        }),
        // bar-chart
        MenuItem::PlotsAndCharts => outline(html! {
            path d="M3 21h18" {}
            rect x="5" y="12" width="3" height="7" {}
            rect x="10.5" y="7" width="3" height="12" {}
            rect x="16" y="4" width="3" height="15" {}
        }),
        // globe
        MenuItem::GeoVisualization => outline(html! {
            circle cx="12" cy="12" r="9" {}
            path d="M3.6 9h16.8" {}
            path d="M3.6 15h16.8" {}
            path d="M12 3a15 15 0 0 1 0 18" {}
            path d="M12 3a15 15 0 0 0 0 18" {}
        }),
        // telephone-forward
        MenuItem::Contact => outline(html! {
            path d="M5 4h4l2 5l-2.5 1.5a11 11 0 0 0 5 5l1.5 -2.5l5 2v4a2 2 0 0 1 -2 2a16 16 0 0 1 -15 -15a2 2 0 0 1 2 -2" {}
            path d="M15 7h6" {}
            path d="M18 4l3 3l-3 3" {}
        }),
    }
}

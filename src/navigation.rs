/// The four menu destinations. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    About,
    PlotsAndCharts,
    GeoVisualization,
    Contact,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::About,
        MenuItem::PlotsAndCharts,
        MenuItem::GeoVisualization,
        MenuItem::Contact,
    ];

    /// Shown when no item has been picked yet.
    pub const DEFAULT: MenuItem = MenuItem::About;

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::About => "About",
            MenuItem::PlotsAndCharts => "Plots and Charts",
            MenuItem::GeoVisualization => "GeoVisualization",
            MenuItem::Contact => "Contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            MenuItem::About => "/about",
            MenuItem::PlotsAndCharts => "/charts",
            MenuItem::GeoVisualization => "/geo",
            MenuItem::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<MenuItem> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(MenuItem::DEFAULT);
        }
        MenuItem::ALL.into_iter().find(|item| item.href() == path)
    }
}

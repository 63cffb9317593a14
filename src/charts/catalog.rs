use crate::domain::listing::Field;

pub const RATING_THRESHOLD: f64 = 85.0;
pub const HEAD_ROWS: usize = 100;
pub const TOP_PROPERTY_TYPES: usize = 10;
/// Bed types ranked by frequency; the most common one is left out.
pub const BED_TYPE_RANKS: RankWindow = RankWindow { skip: 1, take: 9 };

/// Which rows of the table feed a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowSelection {
    All,
    /// The first `n` rows in file order.
    Head(usize),
    /// Rows whose `field` is present and strictly below `threshold`.
    Below { field: Field, threshold: f64 },
}

/// How categories are ordered along the categorical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    Appearance,
    /// Ascending by the category itself: by name for text, by value for numbers.
    Sorted,
}

/// A slice of categories ranked by descending frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWindow {
    pub skip: usize,
    pub take: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivation {
    /// Mean of `value` per `category`.
    Mean {
        category: Field,
        value: Field,
        order: CategoryOrder,
    },
    /// The raw values of one column.
    Values { value: Field },
    /// The values of `value` grouped by `category`, in appearance order.
    Groups { category: Field, value: Field },
    /// Row counts per category. `None` keeps appearance order.
    Counts {
        category: Field,
        ranks: Option<RankWindow>,
    },
}

impl Derivation {
    /// The columns this derivation reads.
    pub fn fields(self) -> Vec<Field> {
        match self {
            Derivation::Mean {
                category, value, ..
            }
            | Derivation::Groups { category, value } => vec![category, value],
            Derivation::Values { value } => vec![value],
            Derivation::Counts { category, .. } => vec![category],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the x axis.
    Vertical,
    /// Categories along the y axis.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Bar(Orientation),
    Violin,
    Box,
    Count(Orientation),
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Even catalog positions go left, odd ones right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Placement::Left
        } else {
            Placement::Right
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: RowSelection,
    pub derivation: Derivation,
    pub plot: PlotKind,
}

impl ChartDescriptor {
    /// Whether the plot kind can draw what the derivation produces.
    pub fn is_consistent(&self) -> bool {
        matches!(
            (self.derivation, self.plot),
            (Derivation::Mean { .. }, PlotKind::Bar(_) | PlotKind::Scatter)
                | (Derivation::Values { .. }, PlotKind::Violin)
                | (Derivation::Groups { .. }, PlotKind::Box)
                | (Derivation::Counts { .. }, PlotKind::Count(_))
        )
    }
}

static CATALOG: [ChartDescriptor; 10] = [
    ChartDescriptor {
        title: "Property Types vs Prices",
        description: "Price distribution for different property types.",
        rows: RowSelection::All,
        derivation: Derivation::Mean {
            category: Field::PropertyType,
            value: Field::Price,
            order: CategoryOrder::Appearance,
        },
        plot: PlotKind::Bar(Orientation::Horizontal),
    },
    ChartDescriptor {
        title: "Top 100 Property Price",
        description: "Price distribution for the top 100 properties.",
        rows: RowSelection::Head(HEAD_ROWS),
        derivation: Derivation::Values { value: Field::Price },
        plot: PlotKind::Violin,
    },
    ChartDescriptor {
        title: "Top 100 Property vs Rating",
        description: "Comparison of property types with ratings for the top 100 properties.",
        rows: RowSelection::Head(HEAD_ROWS),
        derivation: Derivation::Groups {
            category: Field::PropertyType,
            value: Field::Rating,
        },
        plot: PlotKind::Box,
    },
    ChartDescriptor {
        title: "Total Room Types",
        description: "Count of different room types.",
        rows: RowSelection::All,
        derivation: Derivation::Counts {
            category: Field::RoomType,
            ranks: None,
        },
        plot: PlotKind::Count(Orientation::Horizontal),
    },
    ChartDescriptor {
        title: "Bed Types Available and Their Counts",
        description: "Count of bed types available.",
        rows: RowSelection::All,
        derivation: Derivation::Counts {
            category: Field::BedType,
            ranks: Some(BED_TYPE_RANKS),
        },
        plot: PlotKind::Count(Orientation::Vertical),
    },
    ChartDescriptor {
        title: "Property Type with Rating Below 85",
        description: "Property types with ratings below 85.",
        rows: RowSelection::Below {
            field: Field::Rating,
            threshold: RATING_THRESHOLD,
        },
        derivation: Derivation::Mean {
            category: Field::PropertyType,
            value: Field::Rating,
            order: CategoryOrder::Appearance,
        },
        plot: PlotKind::Bar(Orientation::Horizontal),
    },
    ChartDescriptor {
        title: "Average Listing Price in Countries",
        description: "Average listing prices in different countries.",
        rows: RowSelection::All,
        derivation: Derivation::Mean {
            category: Field::Country,
            value: Field::Price,
            order: CategoryOrder::Sorted,
        },
        plot: PlotKind::Scatter,
    },
    ChartDescriptor {
        title: "Price vs Rating",
        description: "Relationship between price and rating.",
        rows: RowSelection::All,
        derivation: Derivation::Mean {
            category: Field::Rating,
            value: Field::Price,
            order: CategoryOrder::Sorted,
        },
        plot: PlotKind::Bar(Orientation::Vertical),
    },
    ChartDescriptor {
        title: "No of Days Property Available for a Year",
        description: "Availability of properties for a year.",
        rows: RowSelection::All,
        derivation: Derivation::Mean {
            category: Field::PropertyType,
            value: Field::Availability365,
            order: CategoryOrder::Appearance,
        },
        plot: PlotKind::Bar(Orientation::Horizontal),
    },
    ChartDescriptor {
        title: "Top 10 Property Types",
        description: "Top 10 property types with the highest listings.",
        rows: RowSelection::All,
        derivation: Derivation::Counts {
            category: Field::PropertyType,
            ranks: Some(RankWindow {
                skip: 0,
                take: TOP_PROPERTY_TYPES,
            }),
        },
        plot: PlotKind::Count(Orientation::Horizontal),
    },
];

/// The fixed, ordered list of charts on the "Plots and Charts" page.
pub fn catalog() -> &'static [ChartDescriptor] {
    &CATALOG
}

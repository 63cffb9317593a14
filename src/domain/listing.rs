/// The listing columns the dashboard reads.
///
/// A listing row carries more columns than these in the source file; only
/// the ones named here are ever looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Country,
    Price,
    Rating,
    Availability365,
    PropertyType,
    RoomType,
    BedType,
}

impl Field {
    /// Column header in the CSV file.
    pub fn column(self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::Price => "price",
            Field::Rating => "rating",
            Field::Availability365 => "availability_365",
            Field::PropertyType => "property_type",
            Field::RoomType => "room_type",
            Field::BedType => "bed_type",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Price | Field::Rating | Field::Availability365
        )
    }
}

/// Formats a numeric cell the way it reads in a label: whole numbers
/// without decimals, everything else with two.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

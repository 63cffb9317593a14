use crate::charts::catalog::{CategoryOrder, Derivation, RankWindow, RowSelection};
use crate::data::ListingTable;
use crate::domain::listing::{format_number, Field};
use crate::errors::ServerError;
use polars::prelude::*;

const CATEGORY: &str = "category";
const VALUE: &str = "value";
const COUNT: &str = "count";

/// The plotted view of the table, ready to hand to a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Means(Vec<(String, f64)>),
    Values(Vec<f64>),
    Groups(Vec<(String, Vec<f64>)>),
    Counts(Vec<(String, usize)>),
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Means(v) => v.is_empty(),
            ChartData::Values(v) => v.is_empty(),
            ChartData::Groups(v) => v.is_empty(),
            ChartData::Counts(v) => v.is_empty(),
        }
    }
}

/// A numeric column as `Float64`. NaN counts as missing.
fn number(field: Field) -> Expr {
    col(field.column())
        .cast(DataType::Float64)
        .fill_nan(lit(NULL))
}

/// A category column. Numeric categories stay numbers so they sort by value.
fn category(field: Field) -> Expr {
    if field.is_numeric() {
        number(field)
    } else {
        col(field.column()).cast(DataType::String)
    }
}

/// The rows picked by `rows`, in file order.
pub fn select_rows(table: &ListingTable, rows: RowSelection) -> Result<LazyFrame, ServerError> {
    let frame = table.frame();
    match rows {
        RowSelection::All => Ok(frame.clone().lazy()),
        RowSelection::Head(n) => Ok(frame.head(Some(n)).lazy()),
        RowSelection::Below { field, threshold } => {
            table.require(field)?;
            Ok(frame
                .clone()
                .lazy()
                .filter(number(field).lt(lit(threshold))))
        }
    }
}

pub fn derive(
    table: &ListingTable,
    rows: RowSelection,
    derivation: Derivation,
) -> Result<ChartData, ServerError> {
    for field in derivation.fields() {
        table.require(field)?;
    }
    let selected = select_rows(table, rows)?;

    match derivation {
        Derivation::Mean {
            category: by,
            value,
            order,
        } => {
            let mut means = paired(selected, by, value)
                .group_by_stable([col(CATEGORY)])
                .agg([col(VALUE).mean()]);
            if order == CategoryOrder::Sorted {
                means = means.sort([CATEGORY], SortMultipleOptions::default());
            }
            let frame = means.collect()?;

            let means = frame.column(VALUE)?.f64()?;
            Ok(ChartData::Means(
                labels(&frame, by)?
                    .into_iter()
                    .zip(means)
                    .filter_map(|(label, mean)| Some((label?, mean?)))
                    .collect(),
            ))
        }
        Derivation::Values { value } => {
            let frame = selected
                .select([number(value).alias(VALUE)])
                .filter(col(VALUE).is_not_null())
                .collect()?;
            Ok(ChartData::Values(
                frame.column(VALUE)?.f64()?.into_no_null_iter().collect(),
            ))
        }
        Derivation::Groups { category: by, value } => {
            let frame = paired(selected, by, value)
                .group_by_stable([col(CATEGORY)])
                .agg([col(VALUE)])
                .collect()?;

            let mut groups = Vec::new();
            for (label, values) in labels(&frame, by)?.into_iter().zip(frame.column(VALUE)?.list()?) {
                let (Some(label), Some(values)) = (label, values) else {
                    continue;
                };
                groups.push((label, values.f64()?.into_no_null_iter().collect()));
            }
            Ok(ChartData::Groups(groups))
        }
        Derivation::Counts { category: by, ranks } => {
            let mut counts = selected
                .select([category(by).alias(CATEGORY)])
                .filter(col(CATEGORY).is_not_null())
                .group_by_stable([col(CATEGORY)])
                .agg([len().alias(COUNT)]);
            if let Some(window) = ranks {
                counts = ranked(counts, window);
            }
            let frame = counts.collect()?;

            let tallies = frame.column(COUNT)?.cast(&DataType::UInt64)?;
            Ok(ChartData::Counts(
                labels(&frame, by)?
                    .into_iter()
                    .zip(tallies.u64()?)
                    .filter_map(|(label, n)| Some((label?, n? as usize)))
                    .collect(),
            ))
        }
    }
}

/// Category and value side by side, dropping rows missing either.
fn paired(selected: LazyFrame, by: Field, value: Field) -> LazyFrame {
    selected
        .select([category(by).alias(CATEGORY), number(value).alias(VALUE)])
        .filter(col(CATEGORY).is_not_null().and(col(VALUE).is_not_null()))
}

/// Most frequent first; ties keep appearance order.
fn ranked(counts: LazyFrame, window: RankWindow) -> LazyFrame {
    counts
        .sort(
            [COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .slice(window.skip as i64, window.take as IdxSize)
}

fn labels(frame: &DataFrame, by: Field) -> Result<Vec<Option<String>>, ServerError> {
    let column = frame.column(CATEGORY)?;
    if by.is_numeric() {
        Ok(column.f64()?.into_iter().map(|v| v.map(format_number)).collect())
    } else {
        Ok(column.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::catalog::{catalog, HEAD_ROWS, RATING_THRESHOLD, TOP_PROPERTY_TYPES};
    use crate::domain::listing::Field;

    fn table() -> ListingTable {
        let frame = df!(
            "country" => ["Spain", "Turkey", "Spain", "Brazil", "Turkey"],
            "price" => [100.0, 40.0, 50.0, 300.0, 60.0],
            "rating" => [Some(95.0), Some(80.0), None, Some(70.0), Some(95.0)],
            "availability_365" => [10i64, 365, 0, 200, 30],
            "property_type" => ["Apartment", "House", "Apartment", "Loft", "House"],
            "room_type" => ["Entire home/apt", "Private room", "Private room", "Entire home/apt", "Shared room"],
            "bed_type" => ["Real Bed", "Real Bed", "Futon", "Couch", "Real Bed"]
        )
        .unwrap();
        ListingTable::from_frame(frame)
    }

    fn height(rows: LazyFrame) -> usize {
        rows.collect().unwrap().height()
    }

    #[test]
    fn head_on_short_table_returns_every_row() {
        let rows = select_rows(&table(), RowSelection::Head(HEAD_ROWS)).unwrap();
        assert_eq!(height(rows), 5);
    }

    #[test]
    fn head_truncates_long_tables() {
        let rows = select_rows(&table(), RowSelection::Head(2)).unwrap();
        assert_eq!(height(rows), 2);
    }

    #[test]
    fn top_hundred_keeps_exactly_the_first_hundred_prices() {
        let prices: Vec<f64> = (0..150).map(f64::from).collect();
        let table = ListingTable::from_frame(df!("price" => prices).unwrap());
        let descriptor = &catalog()[1];

        let data = derive(&table, descriptor.rows, descriptor.derivation).unwrap();
        let ChartData::Values(values) = data else {
            panic!("expected values");
        };
        assert_eq!(values.len(), HEAD_ROWS);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[HEAD_ROWS - 1], 99.0);
    }

    #[test]
    fn below_threshold_skips_missing_ratings() {
        let rows = select_rows(
            &table(),
            RowSelection::Below {
                field: Field::Rating,
                threshold: RATING_THRESHOLD,
            },
        )
        .unwrap()
        .collect()
        .unwrap();
        let types = rows.column("property_type").unwrap().str().unwrap();
        let types: Vec<_> = types.into_no_null_iter().collect();
        assert_eq!(types, vec!["House", "Loft"]);
    }

    #[test]
    fn filter_matching_nothing_yields_empty_view() {
        let descriptor = &catalog()[5];
        let rows = RowSelection::Below {
            field: Field::Rating,
            threshold: 10.0,
        };
        let data = derive(&table(), rows, descriptor.derivation).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn means_follow_appearance_order() {
        let data = derive(&table(), RowSelection::All, catalog()[0].derivation).unwrap();
        assert_eq!(
            data,
            ChartData::Means(vec![
                ("Apartment".into(), 75.0),
                ("House".into(), 50.0),
                ("Loft".into(), 300.0),
            ])
        );
    }

    #[test]
    fn country_means_are_sorted_by_name() {
        let data = derive(&table(), RowSelection::All, catalog()[6].derivation).unwrap();
        let ChartData::Means(means) = data else {
            panic!("expected means");
        };
        let names: Vec<_> = means.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Brazil", "Spain", "Turkey"]);
    }

    #[test]
    fn rating_categories_sort_numerically() {
        let frame = df!(
            "price" => [10.0, 20.0, 30.0, 40.0],
            "rating" => [100i64, 9, 80, 100]
        )
        .unwrap();
        let data = derive(
            &ListingTable::from_frame(frame),
            RowSelection::All,
            catalog()[7].derivation,
        )
        .unwrap();
        assert_eq!(
            data,
            ChartData::Means(vec![
                ("9".into(), 20.0),
                ("80".into(), 30.0),
                ("100".into(), 25.0),
            ])
        );
    }

    #[test]
    fn bed_type_window_drops_the_most_common() {
        let data = derive(&table(), RowSelection::All, catalog()[4].derivation).unwrap();
        assert_eq!(
            data,
            ChartData::Counts(vec![("Futon".into(), 1), ("Couch".into(), 1)])
        );
    }

    #[test]
    fn top_property_types_keep_the_ten_most_listed() {
        let mut types = Vec::new();
        for kind in 0..12 {
            for _ in 0..(12 - kind) {
                types.push(format!("Type {kind}"));
            }
        }
        // The least listed type shows up first in the file.
        types.rotate_right(1);
        let table = ListingTable::from_frame(df!("property_type" => types).unwrap());

        let data = derive(&table, RowSelection::All, catalog()[9].derivation).unwrap();
        let ChartData::Counts(counts) = data else {
            panic!("expected counts");
        };
        assert_eq!(counts.len(), TOP_PROPERTY_TYPES);
        let expected: Vec<(String, usize)> =
            (0..10).map(|kind| (format!("Type {kind}"), 12 - kind)).collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn room_types_count_in_appearance_order() {
        let data = derive(&table(), RowSelection::All, catalog()[3].derivation).unwrap();
        assert_eq!(
            data,
            ChartData::Counts(vec![
                ("Entire home/apt".into(), 2),
                ("Private room".into(), 2),
                ("Shared room".into(), 1),
            ])
        );
    }

    #[test]
    fn groups_skip_rows_without_values() {
        let data = derive(&table(), RowSelection::Head(HEAD_ROWS), catalog()[2].derivation).unwrap();
        assert_eq!(
            data,
            ChartData::Groups(vec![
                ("Apartment".into(), vec![95.0]),
                ("House".into(), vec![80.0, 95.0]),
                ("Loft".into(), vec![70.0]),
            ])
        );
    }

    #[test]
    fn nan_values_are_skipped() {
        let frame = df!(
            "property_type" => ["House", "House"],
            "price" => [f64::NAN, 80.0]
        )
        .unwrap();
        let data = derive(
            &ListingTable::from_frame(frame),
            RowSelection::All,
            catalog()[0].derivation,
        )
        .unwrap();
        assert_eq!(data, ChartData::Means(vec![("House".into(), 80.0)]));
    }

    #[test]
    fn missing_column_fails_the_view() {
        let frame = df!("country" => ["Spain"], "price" => [10.0]).unwrap();
        let table = ListingTable::from_frame(frame);
        let result = derive(&table, RowSelection::All, catalog()[3].derivation);
        assert!(matches!(result, Err(ServerError::MissingColumn(_))));
    }
}

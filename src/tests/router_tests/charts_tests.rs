use crate::charts::catalog::catalog;
use crate::tests::utils::{body_string, csv, csv_with_header, get, sample_rows, CountingSource};

fn charts_body(source: &CountingSource) -> String {
    let mut resp = get("/charts", source).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(&mut resp)
}

/// Titles in document order, split by column.
fn columns(body: &str) -> (Vec<&'static str>, Vec<&'static str>) {
    let left = body.find("column-left").unwrap();
    let right = body.find("column-right").unwrap();
    let (left_html, right_html) = (&body[left..right], &body[right..]);

    let in_column = |html: &str| -> Vec<&'static str> {
        catalog()
            .iter()
            .map(|d| d.title)
            .filter(|title| html.contains(&format!("<h1>{title}</h1>")))
            .collect()
    };
    (in_column(left_html), in_column(right_html))
}

#[test]
fn charts_page_shows_all_ten_titles() {
    let file = csv(&sample_rows());
    let source = CountingSource::new(&file);
    let body = charts_body(&source);

    for descriptor in catalog() {
        assert!(body.contains(descriptor.title), "missing {}", descriptor.title);
    }
    assert!(!body.contains("chart-error"));
}

#[test]
fn placement_is_stable_across_renders() {
    let file = csv(&sample_rows());
    let source = CountingSource::new(&file);

    let first = columns(&charts_body(&source));
    let second = columns(&charts_body(&source));

    assert_eq!(first, second);
    assert_eq!(first.0.len(), 5);
    assert_eq!(first.1.len(), 5);
    assert_eq!(first.0[0], "Property Types vs Prices");
    assert_eq!(first.1[0], "Top 100 Property Price");
}

#[test]
fn high_ratings_leave_the_below_threshold_chart_empty() {
    let file = csv(&[
        "A,Spain,80,90,10,House,Private room,Real Bed",
        "B,Spain,90,99,20,Loft,Private room,Real Bed",
    ]);
    let source = CountingSource::new(&file);
    let body = charts_body(&source);

    assert!(body.contains("Property Type with Rating Below 85"));
    assert!(!body.contains("chart-error"));
    assert!(body.contains("No data"));
}

#[test]
fn missing_column_fails_only_its_charts() {
    let file = csv_with_header(
        "name,country,price,rating,availability_365,property_type,room_type",
        &[
            "A,Spain,80,90,10,House,Private room",
            "B,Turkey,60,70,20,Loft,Shared room",
        ],
    );
    let source = CountingSource::new(&file);
    let body = charts_body(&source);

    assert_eq!(body.matches("class=\"chart-error\"").count(), 1);
    assert!(body.contains("Missing column: bed_type"));
    assert_eq!(body.matches("class=\"chart-image\"").count(), 9);
}

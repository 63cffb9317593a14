use crate::tests::utils::{body_string, csv, get, CountingSource};

#[test]
fn shared_country_keeps_every_row() {
    let file = csv(&[
        "A,Spain,80,90,10,House,Private room,Real Bed",
        "B,Spain,120,70,200,Loft,Shared room,Futon",
        "C,Turkey,40,85,5,Apartment,Entire home/apt,Real Bed",
    ]);
    let source = CountingSource::new(&file);
    let mut resp = get("/geo", &source).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Geo Visualization of Airbnb Data:"));
    assert!(body.contains("price=80"));
    assert!(body.contains("price=120"));
    assert!(body.contains("property_type=Loft"));
    assert_eq!(body.matches("country=Spain").count(), 2);
}

#[test]
fn unlocated_country_is_listed_in_the_legend() {
    let file = csv(&["A,Atlantis,80,90,10,House,Private room,Real Bed"]);
    let source = CountingSource::new(&file);
    let mut resp = get("/geo", &source).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Atlantis (not on map)"));
    assert!(body.contains("country=Atlantis"));
}

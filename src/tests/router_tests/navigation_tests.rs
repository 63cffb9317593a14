use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, csv, get, request, sample_rows, CountingSource};
use http::Method;

#[test]
fn about_and_contact_never_read_the_file() {
    let file = csv(&sample_rows());
    let source = CountingSource::new(&file);

    for uri in ["/", "/about", "/contact"] {
        let mut resp = get(uri, &source).unwrap();
        assert_eq!(resp.status(), 200);
        assert!(body_string(&mut resp).contains("Menu"));
    }

    assert_eq!(source.loads(), 0);
}

#[test]
fn root_shows_about_selected() {
    let source = CountingSource::missing();
    let mut resp = get("/", &source).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Project Title: Airbnb Analysis"));
    assert!(body.contains("nav-link-selected"));
    assert!(body.contains("<title>Airbnb Analysis</title>"));
}

#[test]
fn contact_page_lists_the_author() {
    let source = CountingSource::missing();
    let mut resp = get("/contact", &source).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("divahar2896@gmail.com"));
}

#[test]
fn every_data_page_visit_reloads_the_file() {
    let file = csv(&sample_rows());
    let source = CountingSource::new(&file);

    get("/charts", &source).unwrap();
    get("/geo", &source).unwrap();
    get("/charts", &source).unwrap();

    assert_eq!(source.loads(), 3);
}

#[test]
fn missing_file_fails_data_pages_only() {
    let source = CountingSource::missing();

    match get("/charts", &source) {
        Err(err @ ServerError::DataLoad(_)) => assert_eq!(err.status(), 500),
        other => panic!("expected DataLoad, got {other:?}"),
    }
    assert!(matches!(get("/geo", &source), Err(ServerError::DataLoad(_))));

    let resp = get("/about", &source).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn unknown_path_is_not_found() {
    let source = CountingSource::missing();
    let result = get("/admin", &source);

    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn non_get_is_rejected() {
    let source = CountingSource::missing();
    let result = handle(request(Method::POST, "/charts"), &source);

    match result {
        Err(err @ ServerError::BadRequest(_)) => assert_eq!(err.status(), 400),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    assert_eq!(source.loads(), 0);
}

#[test]
fn stylesheet_is_served() {
    let source = CountingSource::missing();
    let mut resp = get("/static/main.css", &source).unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
    assert!(body_string(&mut resp).contains("#b30e35"));
}

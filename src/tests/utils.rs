use crate::data::{CsvListingSource, ListingSource, ListingTable};
use crate::errors::ServerError;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::cell::Cell;
use std::io::{Read, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "name,country,price,rating,availability_365,property_type,room_type,bed_type";

/// Wraps the CSV source and records how many times the file was read.
pub struct CountingSource {
    inner: CsvListingSource,
    loads: Cell<usize>,
}

impl CountingSource {
    pub fn new(file: &NamedTempFile) -> Self {
        Self {
            inner: CsvListingSource::new(file.path()),
            loads: Cell::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            inner: CsvListingSource::new("does/not/exist.csv"),
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl ListingSource for CountingSource {
    fn load(&self) -> Result<ListingTable, ServerError> {
        self.loads.set(self.loads.get() + 1);
        self.inner.load()
    }
}

/// Writes `rows` under `header` to a temporary CSV file.
pub fn csv_with_header(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn csv(rows: &[&str]) -> NamedTempFile {
    csv_with_header(HEADER, rows)
}

pub fn sample_rows() -> Vec<&'static str> {
    vec![
        "Duplex,Portugal,80,89,239,House,Entire home/apt,Real Bed",
        "Horto flat,Brazil,317,100,0,Apartment,Entire home/apt,Real Bed",
        "Loft,Spain,120,72,30,Loft,Private room,Futon",
        "Cabin,Spain,65,95,300,House,Private room,Real Bed",
        "Room,Turkey,40,,150,Apartment,Shared room,Couch",
    ]
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn get<S: ListingSource>(uri: &str, source: &S) -> Result<Response, ServerError> {
    handle(request(Method::GET, uri), source)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

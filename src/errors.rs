use astra::Response;
// errors.rs
use plotters::drawing::DrawingAreaErrorKind;
use polars::prelude::PolarsError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (data, charts).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DataLoad(String),
    MissingColumn(String),
    Render(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataLoad(msg) => write!(f, "Data Error: {msg}"),
            ServerError::MissingColumn(name) => write!(f, "Missing column: {name}"),
            ServerError::Render(msg) => write!(f, "Chart Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl ServerError {
    /// HTTP status the error page is served with.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DataLoad(_)
            | ServerError::MissingColumn(_)
            | ServerError::Render(_)
            | ServerError::InternalError => 500,
        }
    }
}

impl std::error::Error for ServerError {}

impl<E> From<DrawingAreaErrorKind<E>> for ServerError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ServerError::Render(err.to_string())
    }
}

impl From<PolarsError> for ServerError {
    fn from(err: PolarsError) -> Self {
        ServerError::DataLoad(err.to_string())
    }
}

use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// Every failure in the application is a terminal outcome of one user
/// action: the operation aborts, state is unchanged, and the message is
/// shown. Nothing here is retried.
#[derive(Debug)]
pub enum AppError {
    /// Bad input: out-of-range export bounds, invalid URL, bad video id,
    /// non-image MIME type, bad replace position.
    Validation(String),
    /// An operation that would break a deck invariant, like deleting the
    /// last slide or the last point.
    Structural(String),
    /// An import file that is not a recognizable export artifact.
    ImportFormat(String),
    /// A failed content read, surfaced with the underlying cause.
    Io(String),
    Template(askama::Error),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::Structural(msg) => write!(f, "{msg}"),
            AppError::ImportFormat(msg) => write!(f, "Failed to import presentation: {msg}"),
            AppError::Io(msg) => write!(f, "Read error: {msg}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(_) | AppError::Structural(_) | AppError::ImportFormat(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into an HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

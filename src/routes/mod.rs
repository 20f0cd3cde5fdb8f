//! HTTP handlers and the glue that turns extractor failures into the
//! shared error body.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use utoipa::OpenApi;

use crate::domain::category::Category;
use crate::dto::book::{BookDetail, MessageResponse};
use crate::forms::book::BookForm;
use crate::pagination::PagedResponse;
use crate::services::{FieldError, ServiceError};

pub mod books;
pub mod categories;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        description = "CRUD operations over books and categories with paginated book listings."
    ),
    paths(
        categories::list_categories,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(schemas(
        BookDetail,
        BookForm,
        Category,
        MessageResponse,
        PagedResponse<BookDetail>,
    ))
)]
pub struct ApiDoc;

fn validation_error(message: String, field: Option<&str>) -> actix_web::Error {
    ServiceError::Validation(vec![FieldError {
        message,
        field: field.map(str::to_string),
    }])
    .into()
}

/// Malformed JSON bodies become the shared 400 error body.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(err.to_string(), None)
}

/// Unparseable query strings become the shared 400 error body.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(err.to_string(), None)
}

/// Non-integer path ids become the shared 400 error body.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(err.to_string(), Some("id"))
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, ServiceError> {
    Err(ServiceError::not_found("route"))
}

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::dto::book::{BookDetail, MessageResponse};
use crate::forms::book::{BookForm, ListBooksParams};
use crate::pagination::PagedResponse;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::book as book_service;

#[utoipa::path(
    params(ListBooksParams),
    responses(
        (status = 200, description = "One page of books", body = PagedResponse<BookDetail>),
        (status = 400, description = "Malformed query parameters"),
    )
)]
#[get("/books")]
pub async fn list_books(
    params: web::Query<ListBooksParams>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("Get books by pagination");
    let paged = book_service::list_books(repo.get_ref(), params.into_inner().into())?;
    Ok(HttpResponse::Ok().json(paged))
}

#[utoipa::path(
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "The requested book", body = BookDetail),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No such book"),
    )
)]
#[get("/books/{id}")]
pub async fn get_book(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let book = book_service::get_book_by_id(repo.get_ref(), book_id.into_inner())?;
    Ok(HttpResponse::Ok().json(book))
}

#[utoipa::path(
    request_body = BookForm,
    responses(
        (status = 200, description = "The created book", body = BookDetail),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Referenced category does not exist"),
    )
)]
#[post("/books")]
pub async fn create_book(
    form: web::Json<BookForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate().map_err(ServiceError::from)?;

    log::info!("Create a new book");
    let created = book_service::create_book(repo.get_ref(), (&*form).into())?;
    Ok(HttpResponse::Ok().json(created))
}

#[utoipa::path(
    params(("id" = i32, Path, description = "Book identifier")),
    request_body = BookForm,
    responses(
        (status = 200, description = "The updated book", body = BookDetail),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Book or referenced category missing"),
    )
)]
#[put("/books/{id}")]
pub async fn update_book(
    book_id: web::Path<i32>,
    form: web::Json<BookForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate().map_err(ServiceError::from)?;

    log::info!("Update a book");
    let updated =
        book_service::update_book(repo.get_ref(), book_id.into_inner(), (&*form).into())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No such book"),
    )
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    book_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("Remove a book");
    book_service::delete_book(repo.get_ref(), book_id.into_inner())?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Remove book successfully".to_string(),
    }))
}

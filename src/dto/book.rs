use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::book::Book;
use crate::domain::category::Category;

/// A book with its category flattened in, as served by every book
/// endpoint. Soft-delete state and timestamps stay internal.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct BookDetail {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: i32,
    pub description: String,
    pub author: String,
    pub category: Category,
}

impl From<(Book, Category)> for BookDetail {
    fn from((book, category): (Book, Category)) -> Self {
        Self {
            id: book.id,
            title: book.title,
            image: book.image,
            quantity: book.quantity,
            price: book.price,
            description: book.description,
            author: book.author,
            category,
        }
    }
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

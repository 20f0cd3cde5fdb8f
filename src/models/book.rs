use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::book::{
    Book as DomainBook, NewBook as DomainNewBook, UpdateBook as DomainUpdateBook,
};
use crate::models::category::Category;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::books)]
#[diesel(belongs_to(Category, foreign_key = category_id))]
/// Diesel model for [`crate::domain::book::Book`].
pub struct Book {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: i32,
    pub description: String,
    pub author: String,
    pub category_id: i32,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::books)]
/// Insertable form of [`Book`]. Timestamps and the soft-delete flag take
/// their column defaults.
pub struct NewBook<'a> {
    pub title: &'a str,
    pub image: &'a str,
    pub quantity: i32,
    pub price: i32,
    pub description: &'a str,
    pub author: &'a str,
    pub category_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::books)]
/// Data used when replacing a [`Book`] record in full.
pub struct UpdateBook<'a> {
    pub title: &'a str,
    pub image: &'a str,
    pub quantity: i32,
    pub price: i32,
    pub description: &'a str,
    pub author: &'a str,
    pub category_id: i32,
}

impl From<Book> for DomainBook {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            image: book.image,
            quantity: book.quantity,
            price: book.price,
            description: book.description,
            author: book.author,
            category_id: book.category_id,
            is_deleted: book.is_deleted,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBook> for NewBook<'a> {
    fn from(book: &'a DomainNewBook) -> Self {
        Self {
            title: book.title.as_str(),
            image: book.image.as_str(),
            quantity: book.quantity,
            price: book.price,
            description: book.description.as_str(),
            author: book.author.as_str(),
            category_id: book.category_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateBook> for UpdateBook<'a> {
    fn from(book: &'a DomainUpdateBook) -> Self {
        Self {
            title: book.title.as_str(),
            image: book.image.as_str(),
            quantity: book.quantity,
            price: book.price,
            description: book.description.as_str(),
            author: book.author.as_str(),
            category_id: book.category_id,
        }
    }
}

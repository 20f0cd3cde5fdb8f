//! Persistence traits consumed by the service layer and their Diesel
//! implementation.

use crate::db::DbPool;
use crate::domain::{
    book::{Book, NewBook, UpdateBook},
    category::Category,
};
use crate::repository::errors::RepositoryResult;

pub mod book;
pub mod category;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository handed to every handler as actix app data.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Column a book listing can be ordered by. Unknown names fall back to
/// the primary key instead of reaching the query builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Title,
    Author,
    Price,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn {
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "author" => Self::Author,
            "price" => Self::Price,
            "quantity" => Self::Quantity,
            "created_at" => Self::CreatedAt,
            "updated_at" => Self::UpdatedAt,
            _ => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct BookListQuery {
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
    pub pagination: Option<Pagination>,
}

impl BookListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn order_by(mut self, column: SortColumn, order: SortOrder) -> Self {
        self.sort_column = column;
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait BookReader {
    /// Fetches a non-deleted book with its category.
    fn get_book_by_id(&self, id: i32) -> RepositoryResult<Option<(Book, Category)>>;
    /// Returns the filtered total and the requested page, soft-deleted
    /// rows excluded.
    fn list_books(&self, query: BookListQuery) -> RepositoryResult<(usize, Vec<(Book, Category)>)>;
    /// Returns every row, soft-deleted ones included.
    fn list_all_books(&self) -> RepositoryResult<Vec<(Book, Category)>>;
}

pub trait BookWriter {
    fn create_book(&self, new_book: &NewBook) -> RepositoryResult<Book>;
    fn update_book(&self, book_id: i32, updates: &UpdateBook) -> RepositoryResult<Book>;
    /// Marks the row deleted and refreshes its update timestamp.
    fn delete_book(&self, book_id: i32) -> RepositoryResult<Book>;
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

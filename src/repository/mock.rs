//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::{
    book::{Book, NewBook, UpdateBook},
    category::Category,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookListQuery, BookReader, BookWriter, CategoryReader};

mock! {
    pub Repository {}

    impl BookReader for Repository {
        fn get_book_by_id(&self, id: i32) -> RepositoryResult<Option<(Book, Category)>>;
        fn list_books(&self, query: BookListQuery) -> RepositoryResult<(usize, Vec<(Book, Category)>)>;
        fn list_all_books(&self) -> RepositoryResult<Vec<(Book, Category)>>;
    }

    impl BookWriter for Repository {
        fn create_book(&self, new_book: &NewBook) -> RepositoryResult<Book>;
        fn update_book(&self, book_id: i32, updates: &UpdateBook) -> RepositoryResult<Book>;
        fn delete_book(&self, book_id: i32) -> RepositoryResult<Book>;
    }

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}
